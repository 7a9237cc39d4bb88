//! 조회 실행
//!
//! Dashboard의 조회 사이클(begin → fetch → complete)을 한 번 돌린다.

use gourmet_common::{fetch_restaurants, Dashboard, FetchOptions, GenerativeClient, ReviewRepository};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 현재 시각 (Unix epoch 밀리초)
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("AI가 주변 맛집 리뷰를 분석하고 있습니다...");
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// 목록 새로고침
///
/// 이미 조회 중이면 false. 결과(성공/실패)는 Dashboard 상태에 반영된다.
pub async fn refresh<C, R>(
    dashboard: &mut Dashboard<R>,
    client: &C,
    options: &FetchOptions,
    show_progress: bool,
) -> bool
where
    C: GenerativeClient,
    R: ReviewRepository,
{
    if !dashboard.begin_refresh() {
        tracing::debug!("refresh ignored while loading");
        return false;
    }

    let pb = show_progress.then(spinner);
    let result = fetch_restaurants(client, options, now_ms()).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let result = result.map(|outcome| {
        for failure in &outcome.failures {
            tracing::debug!(model = %failure.model, error = %failure.error, "attempt failed");
        }
        if outcome.used_fallback && show_progress {
            println!("⚠ AI 응답을 받지 못해 기본 목록을 표시합니다.");
        }
        outcome.restaurants
    });

    dashboard.complete_refresh(result, now_ms());
    true
}
