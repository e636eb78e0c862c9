//! Gemini API連携（ブラウザ fetch）

use async_trait::async_trait;
use smartsend_common::gemini::{
    endpoint, http_error_message, GeminiRequest, GeminiResponse, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE, GEMINI_API_BASE,
};
use smartsend_common::{parse_estimate, AnalysisGateway, CapturedImage, Error, PackageEstimate, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Request, RequestInit, RequestMode, Response};

use crate::device::js_message;

/// ビルド時に埋め込むAPIキー
pub const API_KEY: &str = match option_env!("GEMINI_API_KEY") {
    Some(key) => key,
    None => "",
};

/// 解析リクエストのタイムアウト
pub const REQUEST_TIMEOUT_MS: u32 = 60_000;

pub struct BrowserGateway {
    api_key: String,
    model: String,
}

impl BrowserGateway {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl AnalysisGateway for BrowserGateway {
    async fn analyze(&self, image: &CapturedImage) -> Result<PackageEstimate> {
        if self.api_key.is_empty() {
            return Err(Error::Config("GEMINI_API_KEY was not set at build time".to_string()));
        }

        let request = GeminiRequest::for_image(image, DEFAULT_TEMPERATURE);
        let body = serde_json::to_string(&request)?;
        let url = endpoint(GEMINI_API_BASE, &self.model, &self.api_key);

        let response = post_json(&url, &body).await?;
        parse_estimate(&response.into_text()?)
    }
}

fn transport(e: JsValue) -> Error {
    Error::Transport(js_message(&e))
}

fn contract(e: JsValue) -> Error {
    Error::Contract(js_message(&e))
}

/// エラー応答のボディ（読めなければ JS 側の理由）
async fn read_text(resp: &Response) -> std::result::Result<String, String> {
    let promise = resp.text().map_err(|e| js_message(&e))?;
    let text = JsFuture::from(promise).await.map_err(|e| js_message(&e))?;
    Ok(text.as_string().unwrap_or_default())
}

async fn post_json(url: &str, body: &str) -> Result<GeminiResponse> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));
    let signal = AbortSignal::timeout_with_u32(REQUEST_TIMEOUT_MS);
    opts.set_signal(Some(&signal));

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    if !resp.ok() {
        let body = read_text(&resp).await;
        return Err(Error::Transport(http_error_message(resp.status(), body)));
    }

    let json = JsFuture::from(resp.json().map_err(contract)?)
        .await
        .map_err(contract)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Contract(e.to_string()))
}
