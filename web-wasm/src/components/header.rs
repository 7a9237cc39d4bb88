//! 헤더 컴포넌트

use crate::app::{start_refresh, AppDashboard};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

#[component]
pub fn Header(dashboard: RwSignal<AppDashboard>, api_key: RwSignal<String>) -> impl IntoView {
    let loading = move || dashboard.with(|d| d.state().loading);

    view! {
        <header class="header">
            <div>
                <h1>"NRF Gourmet"</h1>
                <p class="subtitle">"한국연구재단 주변 점심 맛집 AI 추천"</p>
            </div>
            <div class="header-actions">
                <span class="updated-at">
                    {move || updated_label(dashboard.with(|d| d.state().timestamp))}
                </span>
                <button
                    class="btn btn-secondary"
                    disabled=loading
                    on:click=move |_| start_refresh(dashboard, api_key)
                >
                    {move || if loading() { "분석 중..." } else { "새로고침" }}
                </button>
            </div>
        </header>
    }
}

fn updated_label(timestamp: i64) -> String {
    if timestamp <= 0 {
        return String::new();
    }
    let date = js_sys::Date::new(&JsValue::from_f64(timestamp as f64));
    let time: String = date.to_locale_time_string("ko-KR").into();
    format!("{} 업데이트", time)
}
