//! 맛집 카드 목록

use crate::app::AppDashboard;
use gourmet_common::view::{map_search_query, MAP_SEARCH_BASE};
use gourmet_common::{format_rating, Restaurant};
use leptos::prelude::*;

/// 네이버 지도 검색 링크
fn map_link(name: &str) -> String {
    let query: String = js_sys::encode_uri_component(&map_search_query(name)).into();
    format!("{}{}", MAP_SEARCH_BASE, query)
}

#[component]
pub fn RestaurantList(
    dashboard: RwSignal<AppDashboard>,
    review_target: RwSignal<Option<String>>,
) -> impl IntoView {
    let visible = move || {
        dashboard.with(|d| d.visible().into_iter().cloned().collect::<Vec<Restaurant>>())
    };

    view! {
        <section class="restaurant-section">
            <div class="list-header">
                <h2>{move || format!("{} 리스트", dashboard.with(|d| d.category()))}</h2>
                <span class="text-muted">"자차 15분 이내, 블로그 및 지도 리뷰 기반 AI 추천"</span>
            </div>
            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="empty">"해당 카테고리의 맛집 정보를 찾지 못했습니다."</p> }
            >
                <div class="restaurant-grid">
                    <For
                        each=visible
                        key=|restaurant| restaurant.id.clone()
                        children=move |restaurant| {
                            view! {
                                <RestaurantCard
                                    restaurant=restaurant
                                    dashboard=dashboard
                                    review_target=review_target
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn RestaurantCard(
    restaurant: Restaurant,
    dashboard: RwSignal<AppDashboard>,
    review_target: RwSignal<Option<String>>,
) -> impl IntoView {
    let rating = {
        let restaurant = restaurant.clone();
        move || format_rating(dashboard.with(|d| d.display_rating(&restaurant)))
    };
    let latest = {
        let name = restaurant.name.clone();
        move || dashboard.with(|d| d.latest_comment(&name).map(str::to_string))
    };
    let map_url = map_link(&restaurant.name);
    let name = restaurant.name.clone();

    view! {
        <article class="restaurant-card">
            <div class="card-head">
                <span class="category-badge">{restaurant.category.label()}</span>
                <span class="rating">"★ " {rating}</span>
            </div>
            <h3 class="restaurant-name">{restaurant.name.clone()}</h3>
            <p class="distance">{restaurant.distance.clone()}</p>
            <p class="ai-summary">"\"" {restaurant.ai_summary.clone()} "\""</p>
            <div class="keywords">
                {restaurant
                    .keywords
                    .iter()
                    .map(|k| view! { <span class="keyword">"#" {k.clone()}</span> })
                    .collect_view()}
            </div>
            <div class="latest-review">
                {move || match latest() {
                    Some(comment) => {
                        view! { <p>"최신 연구원 리뷰: \"" {comment} "\""</p> }.into_any()
                    }
                    None => view! { <p class="text-muted">"아직 등록된 리뷰가 없습니다."</p> }.into_any(),
                }}
            </div>
            <div class="card-actions">
                <a class="btn btn-secondary" href=map_url target="_blank" rel="noopener noreferrer">
                    "지도 보기"
                </a>
                <button class="btn btn-primary" on:click=move |_| review_target.set(Some(name.clone()))>
                    "리뷰 작성하기"
                </button>
            </div>
        </article>
    }
}
