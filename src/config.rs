use crate::error::{GourmetError, Result};
use gourmet_common::fetcher::{DEFAULT_MODELS, DEFAULT_RATE_LIMIT_DELAY};
use gourmet_common::{FallbackPolicy, FetchOptions, PromptTemplate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    /// 시도 순서대로 나열한 후보 모델
    pub models: Vec<String>,
    pub landmark: String,
    pub area: String,
    pub rate_limit_delay_ms: u64,
    pub timeout_seconds: u64,
    /// Google 검색 그라운딩 사용
    pub search_grounding: bool,
    /// 모든 모델이 실패하면 내장 데이터 사용
    pub use_fallback_data: bool,
    /// 리뷰 파일 경로 (없으면 설정 디렉터리의 reviews.json)
    pub reviews_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let prompt = PromptTemplate::default();
        Self {
            api_key: None,
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            landmark: prompt.landmark,
            area: prompt.area,
            rate_limit_delay_ms: DEFAULT_RATE_LIMIT_DELAY.as_millis() as u64,
            timeout_seconds: 90,
            search_grounding: true,
            use_fallback_data: false,
            reviews_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GourmetError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("nrf-gourmet"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn reviews_path(&self) -> Result<PathBuf> {
        match &self.reviews_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("reviews.json")),
        }
    }

    /// 환경 변수를 우선하고, 없으면 설정 파일의 키를 사용
    pub fn get_api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }

        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(GourmetError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    pub fn fetch_options(&self, force_fallback: bool) -> FetchOptions {
        FetchOptions {
            models: self.models.clone(),
            prompt: PromptTemplate {
                landmark: self.landmark.clone(),
                area: self.area.clone(),
                ..PromptTemplate::default()
            },
            rate_limit_delay: Duration::from_millis(self.rate_limit_delay_ms),
            fallback: if force_fallback || self.use_fallback_data {
                FallbackPolicy::BuiltIn
            } else {
                FallbackPolicy::Fail
            },
        }
    }
}
