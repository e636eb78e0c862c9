//! Gemini generateContent のリクエスト/レスポンス型
//!
//! 通信処理はCLI（reqwest）とWeb（fetch）がそれぞれ持ち、
//! ここではワイヤフォーマットの組み立てと取り出しだけを行う。

use crate::error::{Error, Result};
use crate::image::CapturedImage;
use crate::prompts::{response_schema, ANALYSIS_PROMPT};
use serde::{Deserialize, Serialize};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// 推定値を安定させるため低めに設定
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

/// generateContent のエンドポイントURL
///
/// `base` は通常 `GEMINI_API_BASE`。テスト時はローカルサーバーを指す。
pub fn endpoint(base: &str, model: &str, api_key: &str) -> String {
    format!("{}/{}:generateContent?key={}", base.trim_end_matches('/'), model, api_key)
}

/// エラーボディを残す最大文字数
pub const ERROR_BODY_PREVIEW: usize = 300;

/// 2xx 以外の応答を Transport エラーの文言にする
///
/// ボディが読めなかった場合はその理由を残す。
pub fn http_error_message<E: std::fmt::Display>(
    status: impl std::fmt::Display,
    body: std::result::Result<String, E>,
) -> String {
    let preview = match body {
        Ok(body) => body.chars().take(ERROR_BODY_PREVIEW).collect::<String>(),
        Err(e) => format!("<unreadable body: {}>", e),
    };
    format!("API error: {} {}", status, preview)
}

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: serde_json::Value,
}

/// Gemini APIレスポンス
#[derive(Debug, Default, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GeminiRequest {
    /// 画像1枚 + 固定指示 + responseSchema のリクエストを組み立てる
    pub fn for_image(image: &CapturedImage, temperature: f32) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.media_type().to_string(),
                            data: image.payload().to_string(),
                        },
                    },
                    Part::Text { text: ANALYSIS_PROMPT.to_string() },
                ],
            }],
            generation_config: GenerationConfig {
                temperature,
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        }
    }
}

impl GeminiResponse {
    /// 最初の候補のテキストを連結して返す。無ければ EmptyResponse
    pub fn into_text(self) -> Result<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::EmptyResponse);
        }
        Ok(text)
    }
}
