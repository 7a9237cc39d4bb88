//! 카테고리 탭

use crate::app::AppDashboard;
use gourmet_common::CategoryFilter;
use leptos::prelude::*;

#[component]
pub fn CategoryTabs(dashboard: RwSignal<AppDashboard>) -> impl IntoView {
    view! {
        <nav class="category-tabs">
            {CategoryFilter::tabs()
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab"
                            class:active=move || dashboard.with(|d| d.category()) == tab
                            on:click=move |_| dashboard.update(|d| d.select_category(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
