//! Gemini API 연동 (브라우저 fetch)
//!
//! 요청/응답 형식은 gourmet_common::gemini 와 공유한다.

use gourmet_common::gemini::{
    classify_status, endpoint, require_api_key, GeminiRequest, GeminiResponse, API_KEY_HEADER,
    GEMINI_API_BASE,
};
use gourmet_common::{Error, GenerativeClient, Result};
use gloo::timers::future::TimeoutFuture;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub struct FetchGeminiClient {
    api_key: String,
    search_grounding: bool,
}

impl FetchGeminiClient {
    /// 키가 비어 있으면 요청 전에 MissingApiKey
    pub fn new(api_key: &str, search_grounding: bool) -> Result<Self> {
        Ok(Self {
            api_key: require_api_key(api_key)?.to_string(),
            search_grounding,
        })
    }

    async fn post(&self, model: &str, body: &str) -> std::result::Result<Response, JsValue> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(body));

        let request = Request::new_with_str_and_init(&endpoint(GEMINI_API_BASE, model), &opts)?;
        request.headers().set("Content-Type", "application/json")?;
        request.headers().set(API_KEY_HEADER, &self.api_key)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        resp_value.dyn_into()
    }
}

impl GenerativeClient for FetchGeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let body = serde_json::to_string(&GeminiRequest::text(prompt, self.search_grounding))?;
        let resp = self.post(model, &body).await.map_err(|e| js_error(None, e))?;

        if !resp.ok() {
            let status = resp.status();
            let text = match resp.text() {
                Ok(promise) => JsFuture::from(promise).await.ok().and_then(|v| v.as_string()),
                Err(_) => None,
            };
            return Err(classify_status(status, &text.unwrap_or_default()));
        }

        let status = Some(resp.status());
        let json = JsFuture::from(resp.json().map_err(|e| js_error(status, e))?)
            .await
            .map_err(|e| js_error(status, e))?;
        let response: GeminiResponse =
            serde_wasm_bindgen::from_value(json).map_err(|e| Error::Parse(e.to_string()))?;
        Ok(response.text())
    }

    async fn pause(&self, delay: Duration) {
        TimeoutFuture::new(delay.as_millis().min(u32::MAX as u128) as u32).await;
    }
}

fn js_error(status: Option<u16>, value: JsValue) -> Error {
    Error::Transport {
        status,
        message: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    }
}
