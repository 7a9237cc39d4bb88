//! Gemini API 요청/응답 형식
//!
//! CLI(reqwest)와 Web(fetch)이 같은 직렬화 형식을 쓰도록 여기에 모아 둔다.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// API 키를 싣는 헤더 이름
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API 요청 본문
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

/// 검색 그라운딩 도구 (`{"google_search": {}}`)
#[derive(Debug, Serialize)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Default, Serialize)]
pub struct GoogleSearch {}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

impl GeminiRequest {
    /// 텍스트 프롬프트 하나로 요청 생성
    ///
    /// 검색 그라운딩을 켜면 responseMimeType을 지정할 수 없으므로 설정하지 않는다.
    pub fn text(prompt: &str, search_grounding: bool) -> Self {
        let tools = if search_grounding {
            vec![Tool { google_search: GoogleSearch::default() }]
        } else {
            Vec::new()
        };
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt.to_string() }],
            }],
            tools,
            generation_config: GenerationConfig { temperature: 0.4 },
        }
    }
}

/// Gemini API 응답
#[derive(Debug, Deserialize)]
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

impl GeminiResponse {
    /// 첫 번째 후보의 텍스트 파트를 모두 이어 붙인다 (없으면 빈 문자열)
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// 모델별 generateContent 엔드포인트
pub fn endpoint(base: &str, model: &str) -> String {
    format!("{}/{}:generateContent", base.trim_end_matches('/'), model)
}

/// 요청 전에 API 키를 확인
pub fn require_api_key(api_key: &str) -> Result<&str> {
    let key = api_key.trim();
    if key.is_empty() {
        return Err(Error::MissingApiKey);
    }
    Ok(key)
}

/// HTTP 실패 응답을 에러로 분류
pub fn classify_status(status: u16, body: &str) -> Error {
    if status == 429 || body.contains("RESOURCE_EXHAUSTED") {
        return Error::RateLimited(format!("API error: {}", status));
    }
    let preview: String = body.chars().take(300).collect();
    Error::Transport {
        status: Some(status),
        message: format!("API error: {} {}", status, preview),
    }
}
