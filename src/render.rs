//! 터미널 출력
//!
//! 카드 한 장 = 분류, 이름, 표시 평점, 거리, AI 요약, 키워드, 최신 리뷰, 지도 링크

use gourmet_common::view::{format_rating, map_search_query, MAP_SEARCH_BASE};
use gourmet_common::{Dashboard, Restaurant, ReviewRepository, UserReview};
use reqwest::Url;

/// 네이버 지도 검색 링크
pub fn map_link(name: &str) -> String {
    let Ok(mut url) = Url::parse(MAP_SEARCH_BASE) else {
        return MAP_SEARCH_BASE.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(&map_search_query(name));
    }
    url.to_string()
}

/// 카드 한 장을 문자열로
pub fn format_card(rank: usize, restaurant: &Restaurant, rating: f64, latest: Option<&str>) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{:>2}. [{}] {}  ★ {}  ({})",
        rank,
        restaurant.category,
        restaurant.name,
        format_rating(rating),
        restaurant.distance
    ));
    lines.push(format!("    AI 요약: {}", restaurant.ai_summary));

    if !restaurant.keywords.is_empty() {
        let tags = restaurant
            .keywords
            .iter()
            .map(|k| format!("#{}", k))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("    {}", tags));
    }
    if !restaurant.address.is_empty() {
        lines.push(format!("    주소: {}", restaurant.address));
    }
    match latest {
        Some(comment) => lines.push(format!("    최신 연구원 리뷰: \"{}\"", comment)),
        None => lines.push("    아직 등록된 리뷰가 없습니다.".to_string()),
    }
    lines.push(format!("    {}", map_link(&restaurant.name)));

    lines.join("\n")
}

/// 현재 탭의 목록 출력
pub fn print_dashboard<R: ReviewRepository>(dashboard: &Dashboard<R>) {
    let state = dashboard.state();

    if let Some(error) = &state.error {
        println!("❌ 오류가 발생했습니다");
        println!("{}", error);
        return;
    }

    let visible = dashboard.visible();
    println!("\n{} 리스트 ({})", dashboard.category(), visible.len());
    println!("자차 15분 이내, 블로그 및 지도 리뷰 기반 AI 추천\n");

    if visible.is_empty() {
        println!("해당 카테고리의 맛집 정보를 찾지 못했습니다.");
        return;
    }

    for (i, restaurant) in visible.iter().enumerate() {
        let card = format_card(
            i + 1,
            restaurant,
            dashboard.display_rating(restaurant),
            dashboard.latest_comment(&restaurant.name),
        );
        println!("{}\n", card);
    }
}

/// 리뷰 목록 출력
pub fn print_reviews(reviews: &[&UserReview]) {
    if reviews.is_empty() {
        println!("저장된 리뷰가 없습니다.");
        return;
    }
    for review in reviews {
        println!(
            "{}  {}  {}  \"{}\"",
            review.date,
            review.restaurant_name,
            "★".repeat(review.rating as usize),
            review.comment
        );
    }
}
