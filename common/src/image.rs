//! 撮影画像（Data URL）
//!
//! カメラのフレーム取得・ファイル選択のどちらも
//! `data:<mime>;base64,<payload>` 形式に正規化して扱う。

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use lazy_static::lazy_static;
use regex::Regex;

/// ヘッダーからMIMEタイプを判定できない場合の既定値
pub const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";

lazy_static! {
    static ref DATA_URL_HEADER: Regex =
        Regex::new(r"^data:(image/[a-zA-Z+]+);base64,").expect("data URL pattern");
}

/// 撮影済みの静止画。取得後は不変で、再撮影時は丸ごと置き換える
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    data_url: String,
}

impl CapturedImage {
    /// FileReader / canvas から得たData URLをそのまま保持
    pub fn from_data_url(data_url: impl Into<String>) -> Result<Self> {
        let data_url = data_url.into();
        if data_url.trim().is_empty() {
            return Err(Error::InvalidImage("empty image data".into()));
        }
        Ok(Self { data_url })
    }

    /// 生バイト列からData URLを組み立てる
    pub fn from_bytes(media_type: &str, bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::InvalidImage("empty image file".into()));
        }
        Ok(Self {
            data_url: format!("data:{};base64,{}", media_type, STANDARD.encode(bytes)),
        })
    }

    /// MIMEタイプ（判定不能なら image/jpeg）
    pub fn media_type(&self) -> &str {
        DATA_URL_HEADER
            .captures(&self.data_url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or(DEFAULT_MEDIA_TYPE)
    }

    /// ヘッダーを除いたBase64ペイロード
    pub fn payload(&self) -> &str {
        match DATA_URL_HEADER.find(&self.data_url) {
            Some(header) => &self.data_url[header.end()..],
            None => &self.data_url,
        }
    }

    pub fn as_data_url(&self) -> &str {
        &self.data_url
    }
}
