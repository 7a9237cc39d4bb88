//! 조회 흐름 테스트
//!
//! 로컬 HTTP 서버로 Gemini 응답을 흉내 내고 GeminiClient → fetch_restaurants → Dashboard 까지 확인

use gourmet_common::error::RETRY_MESSAGE;
use gourmet_common::{
    Category, CategoryFilter, Dashboard, FallbackPolicy, FetchOptions, FetchPhase, MemoryReviewRepository,
};
use nrf_gourmet::app::refresh;
use nrf_gourmet::client::GeminiClient;
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

// ============================================
// 테스트용 HTTP 서버
// ============================================

struct MockServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// 응답을 순서대로 한 번씩 돌려주는 서버
async fn spawn_server(responses: Vec<(u16, String)>) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = requests.clone();

    tokio::spawn(async move {
        for (status, body) in responses {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let request = read_request(&mut socket).await;
            log.lock().unwrap().push(request);

            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    MockServer {
        base_url: format!("http://{}/v1beta/models", addr),
        requests,
    }
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
            let body_len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn gemini_body(text: &str) -> String {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
    .to_string()
}

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test-key", Duration::from_secs(5), true)
        .unwrap()
        .with_base_url(server.base_url.clone())
}

fn options(models: &[&str]) -> FetchOptions {
    FetchOptions {
        models: models.iter().map(|m| m.to_string()).collect(),
        rate_limit_delay: Duration::from_millis(10),
        ..FetchOptions::default()
    }
}

const TWO_PLACES: &str = r#"```json
{"restaurants": [
  {"name": "Foo", "category": "한식", "distance": "자차 5분", "aiRating": 4.1, "aiSummary": "국밥", "keywords": ["든든"], "address": "대전"},
  {"name": "Bar", "category": "중식", "aiRating": 4.6, "keywords": ["짬뽕"]}
]}
```"#;

// ============================================
// 클라이언트 + 조회 루틴
// ============================================

#[tokio::test]
async fn test_request_shape() {
    let server = spawn_server(vec![(200, gemini_body(TWO_PLACES))]).await;
    let client = client_for(&server);

    let mut dashboard = Dashboard::new(MemoryReviewRepository::new());
    assert!(refresh(&mut dashboard, &client, &options(&["gemini-2.0-flash"]), false).await);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(request.starts_with("POST /v1beta/models/gemini-2.0-flash:generateContent"));
    assert!(request.to_lowercase().contains("x-goog-api-key: test-key"));
    assert!(!request.contains("key=test-key"));
    assert!(request.contains("google_search"));
    assert!(request.contains("restaurants"));
}

#[tokio::test]
async fn test_populated_and_sorted() {
    let server = spawn_server(vec![(200, gemini_body(TWO_PLACES))]).await;
    let client = client_for(&server);

    let mut dashboard = Dashboard::new(MemoryReviewRepository::new());
    refresh(&mut dashboard, &client, &options(&["m1"]), false).await;

    let state = dashboard.state();
    assert_eq!(state.phase(), FetchPhase::Populated);
    assert!(state.timestamp > 0);

    let names: Vec<&str> = dashboard.visible().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Bar", "Foo"]);

    let bar = dashboard.visible()[0].clone();
    assert_eq!(bar.distance, "근처");
    assert_eq!(bar.ai_summary, "정보 없음");
    assert!(bar.id.starts_with("gemini-1-"));

    dashboard.select_category(CategoryFilter::Only(Category::Korean));
    let names: Vec<&str> = dashboard.visible().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Foo"]);
}

#[tokio::test]
async fn test_server_error_falls_through_to_next_model() {
    let server = spawn_server(vec![
        (500, r#"{"error": {"message": "internal"}}"#.to_string()),
        (200, gemini_body(TWO_PLACES)),
    ])
    .await;
    let client = client_for(&server);

    let outcome = gourmet_common::fetch_restaurants(&client, &options(&["m1", "m2"]), 1)
        .await
        .unwrap();
    assert_eq!(outcome.model.as_deref(), Some("m2"));
    assert_eq!(outcome.failures.len(), 1);
    assert!(matches!(
        outcome.failures[0].error,
        gourmet_common::Error::Transport { status: Some(500), .. }
    ));
}

#[tokio::test]
async fn test_rate_limit_retries_same_model() {
    let server = spawn_server(vec![
        (429, r#"{"error": {"status": "RESOURCE_EXHAUSTED"}}"#.to_string()),
        (200, gemini_body(TWO_PLACES)),
    ])
    .await;
    let client = client_for(&server);

    let outcome = gourmet_common::fetch_restaurants(&client, &options(&["m1", "m2"]), 1)
        .await
        .unwrap();
    assert_eq!(outcome.model.as_deref(), Some("m1"));

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.starts_with("POST /v1beta/models/m1:")));
}

#[tokio::test]
async fn test_all_models_fail_sets_error_state() {
    let server = spawn_server(vec![
        (200, gemini_body("죄송합니다. 정보를 찾을 수 없습니다.")),
        (200, gemini_body("")),
    ])
    .await;
    let client = client_for(&server);

    let mut dashboard = Dashboard::new(MemoryReviewRepository::new());
    refresh(&mut dashboard, &client, &options(&["m1", "m2"]), false).await;

    let state = dashboard.state();
    assert_eq!(state.phase(), FetchPhase::Failed);
    assert_eq!(state.error.as_deref(), Some(RETRY_MESSAGE));
    assert!(state.data.is_empty());
    assert!(!state.loading);
}

#[tokio::test]
async fn test_builtin_fallback_when_all_models_fail() {
    let server = spawn_server(vec![(200, gemini_body(r#"{"items": []}"#))]).await;
    let client = client_for(&server);

    let opts = FetchOptions {
        fallback: FallbackPolicy::BuiltIn,
        ..options(&["m1"])
    };
    let outcome = gourmet_common::fetch_restaurants(&client, &opts, 99).await.unwrap();
    assert!(outcome.used_fallback);
    assert!(outcome.model.is_none());
    assert!(!outcome.restaurants.is_empty());
    assert!(outcome.restaurants.iter().all(|r| r.id.starts_with("fallback-")));
}

#[tokio::test]
async fn test_refresh_after_failure_recovers() {
    let server = spawn_server(vec![
        (503, "unavailable".to_string()),
        (200, gemini_body(TWO_PLACES)),
    ])
    .await;
    let client = client_for(&server);

    let mut dashboard = Dashboard::new(MemoryReviewRepository::new());
    refresh(&mut dashboard, &client, &options(&["m1"]), false).await;
    assert_eq!(dashboard.state().phase(), FetchPhase::Failed);

    refresh(&mut dashboard, &client, &options(&["m1"]), false).await;
    assert_eq!(dashboard.state().phase(), FetchPhase::Populated);
    assert!(dashboard.state().error.is_none());
    assert_eq!(dashboard.visible().len(), 2);
}

#[tokio::test]
async fn test_user_review_changes_display_rating() {
    let server = spawn_server(vec![(200, gemini_body(TWO_PLACES))]).await;
    let client = client_for(&server);

    let mut dashboard = Dashboard::new(MemoryReviewRepository::new());
    refresh(&mut dashboard, &client, &options(&["m1"]), false).await;
    dashboard.submit_review("Bar", 4, "짬뽕 맛집", 1_000).unwrap();

    let bar = dashboard.visible()[0].clone();
    assert_eq!(bar.name, "Bar");
    assert_eq!(gourmet_common::format_rating(dashboard.display_rating(&bar)), "4.3");
    assert_eq!(dashboard.latest_comment("Bar"), Some("짬뽕 맛집"));
}
