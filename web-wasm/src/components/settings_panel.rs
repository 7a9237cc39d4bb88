//! 설정 패널 컴포넌트

use crate::app::{start_refresh, AppDashboard};
use leptos::prelude::*;

#[component]
pub fn SettingsPanel(dashboard: RwSignal<AppDashboard>, api_key: RwSignal<String>) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let has_key = move || api_key.with(|k| !k.trim().is_empty());

    view! {
        <details class="settings-panel" open=move || !has_key()>
            <summary>"설정"</summary>
            <div class="form-group">
                <label for="api-key">"Gemini API Key"</label>
                <input
                    type="password"
                    id="api-key"
                    placeholder="API Key를 입력..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button
                    class="btn btn-primary btn-small"
                    disabled=move || draft.with(|d| d.trim().is_empty())
                    on:click=move |_| {
                        api_key.set(draft.get_untracked().trim().to_string());
                        draft.set(String::new());
                        start_refresh(dashboard, api_key);
                    }
                >
                    "적용"
                </button>
                <a
                    href="https://aistudio.google.com/app/apikey"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="api-key-link"
                >
                    "API 키 발급 →"
                </a>
                <div class="api-key-status">
                    {move || if has_key() { "API 키 설정됨" } else { "API 키가 설정되지 않았습니다" }}
                </div>
            </div>
        </details>
    }
}
