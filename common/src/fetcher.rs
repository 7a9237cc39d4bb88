//! 모델 대체(fallback) 조회 루틴
//!
//! 후보 모델 목록을 앞에서부터 하나씩 시도한다.
//! - 빈 응답 / JSON 추출 실패 / 구조 오류 / 전송 오류 → 다음 모델
//! - 요청 한도 초과 → 고정 지연 후 같은 모델로 1회 재시도, 실패하면 다음 모델
//! - 모두 실패 → 내장 데이터(BuiltIn) 또는 AllModelsFailed
//!
//! 네트워크와 시계는 GenerativeClient 뒤에 숨긴다 (CLI: reqwest + tokio, Web: fetch + gloo).

use crate::error::{Error, Result};
use crate::fallback::builtin_restaurants;
use crate::normalize::{normalize_restaurants, SOURCE_FALLBACK, SOURCE_GEMINI};
use crate::parser::decode_restaurants;
use crate::prompts::PromptTemplate;
use crate::types::Restaurant;
use std::time::Duration;

pub const DEFAULT_MODELS: &[&str] = &["gemini-2.0-flash", "gemini-1.5-flash", "gemini-1.5-flash-8b"];

pub const DEFAULT_RATE_LIMIT_DELAY: Duration = Duration::from_secs(3);

/// 생성형 AI 호출 경계
#[allow(async_fn_in_trait)]
pub trait GenerativeClient {
    /// 프롬프트를 보내고 응답 텍스트를 받는다
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;

    /// 요청 한도 초과 후 재시도 전 대기
    async fn pause(&self, delay: Duration);
}

/// 모든 모델이 실패했을 때의 처리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// 에러를 호출자에게 전달
    #[default]
    Fail,
    /// 내장 데이터로 대체
    BuiltIn,
}

/// 조회 옵션
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub models: Vec<String>,
    pub prompt: PromptTemplate,
    pub rate_limit_delay: Duration,
    pub fallback: FallbackPolicy,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            prompt: PromptTemplate::default(),
            rate_limit_delay: DEFAULT_RATE_LIMIT_DELAY,
            fallback: FallbackPolicy::Fail,
        }
    }
}

/// 실패한 시도 1건
#[derive(Debug)]
pub struct AttemptFailure {
    pub model: String,
    pub error: Error,
}

/// 조회 결과
#[derive(Debug)]
pub struct FetchOutcome {
    pub restaurants: Vec<Restaurant>,
    /// 성공한 모델 (내장 데이터 사용 시 None)
    pub model: Option<String>,
    pub failures: Vec<AttemptFailure>,
    pub used_fallback: bool,
}

/// 맛집 목록 조회
///
/// # Arguments
/// * `client` - 생성형 AI 클라이언트
/// * `options` - 후보 모델, 프롬프트, 지연, 대체 정책
/// * `now_ms` - id 생성에 쓰는 현재 시각 (Unix epoch 밀리초)
pub async fn fetch_restaurants<C: GenerativeClient>(
    client: &C,
    options: &FetchOptions,
    now_ms: i64,
) -> Result<FetchOutcome> {
    if options.models.is_empty() {
        return Err(Error::Config("model list is empty".into()));
    }

    let prompt = options.prompt.render();
    let mut failures = Vec::new();

    for model in &options.models {
        tracing::debug!(model = %model, "requesting restaurant list");

        let mut result = attempt(client, model, &prompt, now_ms).await;

        let rate_limited = matches!(&result, Err(e) if e.is_rate_limited());
        if rate_limited {
            tracing::warn!(
                model = %model,
                delay_ms = options.rate_limit_delay.as_millis() as u64,
                "rate limited, retrying once"
            );
            client.pause(options.rate_limit_delay).await;
            let retry = attempt(client, model, &prompt, now_ms).await;
            if let Err(first) = std::mem::replace(&mut result, retry) {
                failures.push(AttemptFailure { model: model.clone(), error: first });
            }
        }

        match result {
            Ok(restaurants) => {
                tracing::info!(model = %model, count = restaurants.len(), "restaurant list fetched");
                return Ok(FetchOutcome {
                    restaurants,
                    model: Some(model.clone()),
                    failures,
                    used_fallback: false,
                });
            }
            Err(error) => {
                tracing::warn!(model = %model, error = %error, "model attempt failed");
                failures.push(AttemptFailure { model: model.clone(), error });
            }
        }
    }

    match options.fallback {
        FallbackPolicy::BuiltIn => {
            tracing::warn!(attempts = failures.len(), "all models failed, using built-in data");
            Ok(FetchOutcome {
                restaurants: normalize_restaurants(builtin_restaurants(), SOURCE_FALLBACK, now_ms),
                model: None,
                failures,
                used_fallback: true,
            })
        }
        FallbackPolicy::Fail => {
            tracing::error!(attempts = failures.len(), "all models failed");
            Err(Error::AllModelsFailed {
                attempts: failures.len(),
                reasons: failures
                    .iter()
                    .map(|f| format!("{}: {}", f.model, f.error))
                    .collect(),
            })
        }
    }
}

async fn attempt<C: GenerativeClient>(
    client: &C,
    model: &str,
    prompt: &str,
    now_ms: i64,
) -> Result<Vec<Restaurant>> {
    let text = client.generate(model, prompt).await?;
    let raw = decode_restaurants(&text)?;
    Ok(normalize_restaurants(raw, SOURCE_GEMINI, now_ms))
}
