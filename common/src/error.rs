//! 에러 타입 정의

use thiserror::Error;

/// 모든 모델이 실패했을 때 화면에 표시하는 문구
pub const RETRY_MESSAGE: &str = "정보를 불러오는 데 실패했습니다. 잠시 후 다시 시도해주세요.";

/// API 키가 없을 때 화면에 표시하는 문구
pub const MISSING_KEY_MESSAGE: &str = "Gemini API 키가 설정되지 않았습니다. GEMINI_API_KEY를 설정한 뒤 다시 시도해주세요.";

/// 공통 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("API key is missing")]
    MissingApiKey,

    #[error("Empty response from AI")]
    EmptyResponse,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid data structure: {0}")]
    InvalidStructure(String),

    #[error("Transport error (status {status:?}): {message}")]
    Transport { status: Option<u16>, message: String },

    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// 모델별 실패 사유 ("모델: 에러")를 함께 싣는다
    #[error("All {attempts} model attempts failed: {}", .reasons.join("; "))]
    AllModelsFailed { attempts: usize, reasons: Vec<String> },

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Review comment is empty")]
    EmptyComment,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// 같은 모델로 한 번 더 시도할 가치가 있는 에러인지
    pub fn is_rate_limited(&self) -> bool {
        match self {
            Error::RateLimited(_) => true,
            Error::Transport { status, message } => {
                *status == Some(429) || message.contains("RESOURCE_EXHAUSTED")
            }
            _ => false,
        }
    }

    /// 사용자에게 보여줄 문구
    ///
    /// 키 누락만 별도 안내하고, 나머지는 재시도 안내로 통일한다.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::MissingApiKey => MISSING_KEY_MESSAGE,
            _ => RETRY_MESSAGE,
        }
    }
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, Error>;
