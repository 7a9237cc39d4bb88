//! 메인 애플리케이션 컴포넌트

use crate::api::gemini::FetchGeminiClient;
use crate::components::{
    category_tabs::CategoryTabs,
    header::Header,
    restaurant_card::RestaurantList,
    review_modal::ReviewModal,
    settings_panel::SettingsPanel,
    status::{ErrorView, LoadingView},
};
use crate::storage::LocalStorageReviewStore;
use gloo::console;
use gourmet_common::{fetch_restaurants, Dashboard, FetchOptions, FetchPhase};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub type AppDashboard = Dashboard<LocalStorageReviewStore>;

pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// 빌드 시 주입된 API 키 (없으면 설정 패널에서 입력)
fn injected_api_key() -> String {
    option_env!("GEMINI_API_KEY").unwrap_or_default().to_string()
}

/// 목록 새로고침 시작
///
/// 조회 중이면 무시한다. 결과는 Dashboard에 반영되어 화면이 다시 그려진다.
pub fn start_refresh(dashboard: RwSignal<AppDashboard>, api_key: RwSignal<String>) {
    if !dashboard.try_update(|d| d.begin_refresh()).unwrap_or(false) {
        return;
    }
    let key = api_key.get_untracked();

    spawn_local(async move {
        let result = match FetchGeminiClient::new(&key, true) {
            Ok(client) => fetch_restaurants(&client, &FetchOptions::default(), now_ms())
                .await
                .map(|outcome| {
                    for failure in &outcome.failures {
                        console::warn!(format!("{} 실패: {}", failure.model, failure.error));
                    }
                    outcome.restaurants
                }),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            console::error!(format!("맛집 조회 실패: {}", e));
        }
        dashboard.update(|d| d.complete_refresh(result, now_ms()));
    });
}

#[component]
pub fn App() -> impl IntoView {
    let dashboard = RwSignal::new(Dashboard::new(LocalStorageReviewStore::default()));
    let api_key = RwSignal::new(injected_api_key());
    let review_target = RwSignal::new(None::<String>);

    dashboard.update(|d| d.load_reviews());
    start_refresh(dashboard, api_key);

    view! {
        <div class="container">
            <Header dashboard=dashboard api_key=api_key />
            <SettingsPanel dashboard=dashboard api_key=api_key />
            <CategoryTabs dashboard=dashboard />

            <main class="content">
                {move || match dashboard.with(|d| d.state().phase()) {
                    FetchPhase::Idle | FetchPhase::Loading => view! { <LoadingView /> }.into_any(),
                    FetchPhase::Failed => {
                        view! { <ErrorView dashboard=dashboard api_key=api_key /> }.into_any()
                    }
                    FetchPhase::Populated => {
                        view! { <RestaurantList dashboard=dashboard review_target=review_target /> }
                            .into_any()
                    }
                }}
            </main>

            <ReviewModal dashboard=dashboard review_target=review_target />
        </div>
    }
}
