//! Gemini API 클라이언트 (reqwest)
//!
//! 요청/응답 형식과 에러 분류는 gourmet_common::gemini 를 그대로 사용한다.

use crate::config::Config;
use crate::error::Result;
use gourmet_common::gemini::{
    classify_status, endpoint, require_api_key, GeminiRequest, GeminiResponse, API_KEY_HEADER,
    GEMINI_API_BASE,
};
use gourmet_common::GenerativeClient;
use std::time::Duration;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    search_grounding: bool,
}

impl GeminiClient {
    /// 클라이언트 생성
    ///
    /// 키가 비어 있으면 요청을 보내기 전에 MissingApiKey로 실패한다.
    pub fn new(api_key: &str, timeout: Duration, search_grounding: bool) -> Result<Self> {
        let api_key = require_api_key(api_key)?.to_string();
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key,
            base_url: GEMINI_API_BASE.to_string(),
            search_grounding,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        Self::new(
            &api_key,
            Duration::from_secs(config.timeout_seconds),
            config.search_grounding,
        )
    }

    /// 엔드포인트 교체 (프록시 등)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl GenerativeClient for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> gourmet_common::Result<String> {
        let request = GeminiRequest::text(prompt, self.search_grounding);

        let response = self
            .http
            .post(endpoint(&self.base_url, model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status.as_u16(), &body));
        }

        let payload: GeminiResponse = response.json().await.map_err(transport_error)?;
        let text = payload.text();
        tracing::debug!(model = %model, chars = text.len(), "gemini response received");
        Ok(text)
    }

    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

fn transport_error(e: reqwest::Error) -> gourmet_common::Error {
    gourmet_common::Error::Transport {
        status: e.status().map(|s| s.as_u16()),
        message: e.to_string(),
    }
}
