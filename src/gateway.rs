//! Gemini API連携（reqwest）
//!
//! 画像1枚を generateContent に送り、responseSchema で制約した JSON を
//! PackageEstimate として受け取る。リトライはしない。

use crate::config::Config;
use crate::error::{Result, SmartSendError};
use async_trait::async_trait;
use reqwest::Client;
use smartsend_common::gemini::{
    endpoint, http_error_message, GeminiRequest, GeminiResponse, GEMINI_API_BASE,
};
use smartsend_common::{parse_estimate, AnalysisGateway, CapturedImage, Error, PackageEstimate};
use std::time::Duration;

pub struct GeminiGateway {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl GeminiGateway {
    pub fn new(api_key: String, config: &Config) -> Result<Self> {
        let timeout = config.timeout();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SmartSendError::Config(format!("HTTPクライアント初期化エラー: {}", e)))?;

        Ok(Self {
            client,
            base_url: GEMINI_API_BASE.to_string(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            timeout,
        })
    }

    /// 接続先を差し替える（ローカルのモックサーバー等）
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn describe(&self, e: reqwest::Error) -> Error {
        // URLにはAPIキーが含まれるので落とす
        if e.is_timeout() {
            return Error::Transport(format!("request timed out after {}s", self.timeout.as_secs()));
        }
        Error::Transport(e.without_url().to_string())
    }
}

#[async_trait(?Send)]
impl AnalysisGateway for GeminiGateway {
    async fn analyze(&self, image: &CapturedImage) -> smartsend_common::Result<PackageEstimate> {
        let request = GeminiRequest::for_image(image, self.temperature);
        log::debug!(
            "Gemini request: model={} mime={} payload={} chars",
            self.model,
            image.media_type(),
            image.payload().len()
        );

        let response = self
            .client
            .post(endpoint(&self.base_url, &self.model, &self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.describe(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(|e| e.without_url());
            return Err(Error::Transport(http_error_message(status, body)));
        }

        let payload: GeminiResponse = response
            .json()
            .await
            .map_err(|e| Error::Contract(format!("unreadable Gemini response: {}", e.without_url())))?;

        let text = payload.into_text()?;
        log::debug!("Gemini response: {} chars", text.len());

        parse_estimate(&text)
    }
}

