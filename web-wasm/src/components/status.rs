//! 로딩/오류 표시

use crate::app::{start_refresh, AppDashboard};
use leptos::prelude::*;

#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="status loading">
            <div class="spinner" />
            <p>"AI가 주변 맛집 리뷰를 분석하고 있습니다..."</p>
            <p class="text-muted">"블로그와 지도 리뷰를 검색하는 데 시간이 걸릴 수 있습니다."</p>
        </div>
    }
}

#[component]
pub fn ErrorView(dashboard: RwSignal<AppDashboard>, api_key: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="status error">
            <h3>"오류가 발생했습니다"</h3>
            <p>{move || dashboard.with(|d| d.state().error.clone().unwrap_or_default())}</p>
            <button class="btn btn-primary" on:click=move |_| start_refresh(dashboard, api_key)>
                "다시 시도"
            </button>
        </div>
    }
}
