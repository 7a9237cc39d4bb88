use thiserror::Error;

#[derive(Error, Debug)]
pub enum GourmetError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("API 키가 설정되지 않았습니다. `gourmet config --set-api-key YOUR_KEY` 또는 GEMINI_API_KEY 환경 변수로 설정하세요")]
    MissingApiKey,

    #[error("HTTP 클라이언트 오류: {0}")]
    Http(#[from] reqwest::Error),

    #[error("입력 오류: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON 파싱 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] gourmet_common::Error),
}

pub type Result<T> = std::result::Result<T, GourmetError>;
