//! 정규화 모듈
//!
//! RawRestaurant를 표시용 Restaurant로 변환한다. 누락된 필드는 고정 기본값으로 채우며 실패하지 않는다.

use crate::types::{Category, RawRestaurant, Restaurant};

pub const DEFAULT_DISTANCE: &str = "근처";
pub const DEFAULT_AI_RATING: f64 = 0.0;
pub const DEFAULT_SUMMARY: &str = "정보 없음";

/// 실제 응답에서 만든 레코드의 id 접두어
pub const SOURCE_GEMINI: &str = "gemini";
/// 내장 대체 데이터에서 만든 레코드의 id 접두어
pub const SOURCE_FALLBACK: &str = "fallback";

/// RawRestaurant 목록을 정규화
///
/// # Arguments
/// * `raw` - 디코딩된 항목들
/// * `source` - id 접두어 (SOURCE_GEMINI / SOURCE_FALLBACK)
/// * `now_ms` - 조회 시각 (Unix epoch 밀리초)
pub fn normalize_restaurants(raw: Vec<RawRestaurant>, source: &str, now_ms: i64) -> Vec<Restaurant> {
    raw.into_iter()
        .enumerate()
        .map(|(index, item)| normalize_one(item, source, index, now_ms))
        .collect()
}

fn normalize_one(item: RawRestaurant, source: &str, index: usize, now_ms: i64) -> Restaurant {
    let category = Category::coerce(item.category.as_deref());

    Restaurant {
        id: format!("{}-{}-{}", source, index, now_ms),
        name: item.name.unwrap_or_default(),
        category,
        distance: non_empty(item.distance).unwrap_or_else(|| DEFAULT_DISTANCE.to_string()),
        ai_rating: item
            .ai_rating
            .filter(|r| r.is_finite())
            .unwrap_or(DEFAULT_AI_RATING),
        ai_summary: non_empty(item.ai_summary).unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
        keywords: item.keywords.unwrap_or_default(),
        address: item.address.unwrap_or_default(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
