//! カメラ・共有の JavaScript Bridge
//!
//! ストリームの保持と停止は `js/device.js` 側で行う。

use smartsend_common::capture::{FacingMode, FRAME_JPEG_QUALITY};
use smartsend_common::report::SHARE_TITLE;
use smartsend_common::CapturedImage;
use wasm_bindgen::prelude::*;
use web_sys::HtmlVideoElement;

#[wasm_bindgen(module = "/js/device.js")]
extern "C" {
    #[wasm_bindgen(js_name = startCamera, catch)]
    async fn start_camera_js(video: &HtmlVideoElement, facing_mode: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = stopCamera)]
    fn stop_camera_js();

    #[wasm_bindgen(js_name = grabFrame)]
    fn grab_frame_js(video: &HtmlVideoElement, quality: f64) -> Option<String>;

    #[wasm_bindgen(js_name = shareText)]
    async fn share_text_js(title: &str, text: &str) -> JsValue;
}

/// 共有操作の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// 共有シートで送信
    Shared,
    /// クリップボードへコピー
    Copied,
    Cancelled,
    Failed,
}

impl ShareOutcome {
    fn parse(value: &str) -> Self {
        match value {
            "shared" => ShareOutcome::Shared,
            "copied" => ShareOutcome::Copied,
            "cancelled" => ShareOutcome::Cancelled,
            _ => ShareOutcome::Failed,
        }
    }

    /// 画面に出す確認メッセージ
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ShareOutcome::Copied => Some("Analysis report copied to clipboard!"),
            ShareOutcome::Failed => Some("Could not share the report."),
            ShareOutcome::Shared | ShareOutcome::Cancelled => None,
        }
    }
}

/// 既存ストリームを止めてからカメラを取得する
///
/// 取得中に別の start/stop が走った場合は `Ok(false)`（ストリームは JS 側で解放済み）。
pub async fn start_camera(video: &HtmlVideoElement, facing: FacingMode) -> Result<bool, String> {
    start_camera_js(video, facing.as_constraint())
        .await
        .map(|started| started.as_bool().unwrap_or(false))
        .map_err(|e| js_message(&e))
}

pub fn stop_camera() {
    stop_camera_js();
}

/// 映像の現在フレームをJPEGで取得（映像未準備ならNone）
pub fn grab_frame(video: &HtmlVideoElement) -> Option<CapturedImage> {
    grab_frame_js(video, FRAME_JPEG_QUALITY)
        .and_then(|data_url| CapturedImage::from_data_url(data_url).ok())
}

/// 共有シート、なければクリップボード
pub async fn share(text: &str) -> ShareOutcome {
    let outcome = share_text_js(SHARE_TITLE, text).await;
    ShareOutcome::parse(&outcome.as_string().unwrap_or_default())
}

pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
