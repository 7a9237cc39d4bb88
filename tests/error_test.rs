//! 에러 케이스 테스트
//!
//! CLI 에러 타입의 표시 문구와 변환을 검증

use gourmet_common::error::{MISSING_KEY_MESSAGE, RETRY_MESSAGE};
use nrf_gourmet::client::GeminiClient;
use nrf_gourmet::config::Config;
use nrf_gourmet::error::GourmetError;
use std::time::Duration;

/// GourmetError의 Display 구현 확인
#[test]
fn test_error_display() {
    let errors = vec![
        GourmetError::Config("테스트 설정 오류".to_string()),
        GourmetError::MissingApiKey,
        GourmetError::Common(gourmet_common::Error::EmptyComment),
        GourmetError::Common(gourmet_common::Error::InvalidRating(9)),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "Error display should not be empty");
    }
}

/// 키 안내 문구에 설정 방법이 포함되는지
#[test]
fn test_missing_api_key_mentions_setup() {
    let display = GourmetError::MissingApiKey.to_string();
    assert!(display.contains("gourmet config --set-api-key"));
    assert!(display.contains("GEMINI_API_KEY"));
}

/// 공통 에러는 문구를 그대로 노출
#[test]
fn test_common_error_is_transparent() {
    let inner = gourmet_common::Error::Storage("disk full".to_string());
    let expected = inner.to_string();
    let err: GourmetError = inner.into();
    assert_eq!(err.to_string(), expected);
}

/// std::io::Error 변환
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: GourmetError = io_err.into();
    assert!(matches!(err, GourmetError::Io(_)));
}

/// serde_json::Error 변환
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
    let err: GourmetError = json_err.into();
    assert!(matches!(err, GourmetError::JsonParse(_)));
}

/// 깨진 설정 파일은 JSON 에러
#[test]
fn test_invalid_config_json() {
    let result: std::result::Result<Config, _> = serde_json::from_str("{ models: }");
    assert!(result.is_err());
}

/// 빈 키로는 클라이언트를 만들 수 없다 (요청 전 실패)
#[test]
fn test_blank_key_fails_before_request() {
    let err = match GeminiClient::new("", Duration::from_secs(1), true) {
        Err(e) => e,
        Ok(_) => panic!("blank key should be rejected"),
    };
    match err {
        GourmetError::Common(inner) => {
            assert!(matches!(inner, gourmet_common::Error::MissingApiKey));
            assert_eq!(inner.user_message(), MISSING_KEY_MESSAGE);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// 사용자에게는 재시도 안내 문구만 보인다
#[test]
fn test_user_message_hides_details() {
    let errors = vec![
        gourmet_common::Error::EmptyResponse,
        gourmet_common::Error::Parse("no json".to_string()),
        gourmet_common::Error::AllModelsFailed {
            attempts: 3,
            reasons: vec!["gemini-2.0-flash: Empty response".to_string()],
        },
        gourmet_common::Error::Transport { status: Some(500), message: "boom".to_string() },
    ];
    for err in errors {
        assert_eq!(err.user_message(), RETRY_MESSAGE);
    }
}
