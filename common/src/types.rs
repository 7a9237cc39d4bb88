//! 데이터 모델
//!
//! CLI와 Web(WASM)이 공유하는 타입:
//! - Category / CategoryFilter: 음식 분류와 탭 필터
//! - RawRestaurant: AI 응답을 디코딩한 중간 결과
//! - Restaurant: 정규화가 끝난 표시용 레코드
//! - UserReview: 사용자가 로컬에 남기는 리뷰
//! - SearchState: 조회 1회분의 상태

use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 음식 분류
///
/// 직렬화 값은 한국어 라벨 그대로 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "한식")]
    Korean,
    #[serde(rename = "중식")]
    Chinese,
    #[serde(rename = "양식")]
    Western,
    #[serde(rename = "분식")]
    Snack,
    #[serde(rename = "기타")]
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Korean,
        Category::Chinese,
        Category::Western,
        Category::Snack,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Korean => "한식",
            Category::Chinese => "중식",
            Category::Western => "양식",
            Category::Snack => "분식",
            Category::Other => "기타",
        }
    }

    /// 라벨 완전 일치만 허용
    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// 알 수 없는 값이나 누락은 기타로 보정
    pub fn coerce(raw: Option<&str>) -> Category {
        raw.and_then(Self::from_label).unwrap_or(Category::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 탭 필터 값 (전체는 필터 전용이며 데이터 값으로는 쓰지 않는다)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// 탭 순서: 전체, 한식, 중식, 양식, 분식, 기타
    pub fn tabs() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "전체",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "전체" {
            return Ok(CategoryFilter::All);
        }
        if let Some(c) = Category::from_label(trimmed) {
            return Ok(CategoryFilter::Only(c));
        }
        match trimmed.to_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "korean" => Ok(CategoryFilter::Only(Category::Korean)),
            "chinese" => Ok(CategoryFilter::Only(Category::Chinese)),
            "western" => Ok(CategoryFilter::Only(Category::Western)),
            "snack" => Ok(CategoryFilter::Only(Category::Snack)),
            "other" => Ok(CategoryFilter::Only(Category::Other)),
            _ => Err(format!(
                "Unknown category: {}. Use all, korean, chinese, western, snack, or other",
                s
            )),
        }
    }
}

/// AI 응답 항목을 디코딩한 결과 (모든 필드가 누락될 수 있음)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRestaurant {
    pub name: Option<String>,
    pub category: Option<String>,
    pub distance: Option<String>,
    pub ai_rating: Option<f64>,
    pub ai_summary: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub address: Option<String>,
}

/// 정규화된 맛집 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub distance: String,        // 예: "자차 5분", "1.2km"
    pub ai_rating: f64,          // 0-5, 검증하지 않음
    pub ai_summary: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub address: String,
}

/// 사용자 리뷰
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReview {
    pub id: String,
    /// 맛집 이름 (Restaurant.name과 문자열 완전 일치로 매칭)
    pub restaurant_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

impl UserReview {
    pub const MIN_RATING: u8 = 1;
    pub const MAX_RATING: u8 = 5;

    /// 리뷰 생성
    ///
    /// # Arguments
    /// * `restaurant_name` - 대상 맛집 이름
    /// * `rating` - 1~5 별점
    /// * `comment` - 한줄평
    /// * `now_ms` - 작성 시각 (Unix epoch 밀리초). id와 날짜 표기에 쓰인다
    pub fn new(
        restaurant_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
        now_ms: i64,
    ) -> Result<Self> {
        if !(Self::MIN_RATING..=Self::MAX_RATING).contains(&rating) {
            return Err(Error::InvalidRating(rating));
        }
        Ok(Self {
            id: now_ms.to_string(),
            restaurant_name: restaurant_name.into(),
            rating,
            comment: comment.into(),
            date: format_review_date(now_ms),
        })
    }
}

/// 리뷰 날짜 표기 (한국 표준시, "2024. 3. 5." 형식)
pub fn format_review_date(now_ms: i64) -> String {
    let Some(utc) = DateTime::from_timestamp_millis(now_ms) else {
        return String::new();
    };
    let Some(kst) = FixedOffset::east_opt(9 * 3600) else {
        return String::new();
    };
    utc.with_timezone(&kst).format("%Y. %-m. %-d.").to_string()
}

/// 조회 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Populated,
    Failed,
}

/// 조회 상태 (조회할 때마다 통째로 교체된다)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Vec<Restaurant>,
    /// 마지막 성공 시각 (Unix epoch 밀리초, 0 = 아직 없음)
    pub timestamp: i64,
}

impl SearchState {
    pub fn phase(&self) -> FetchPhase {
        if self.loading {
            FetchPhase::Loading
        } else if self.error.is_some() {
            FetchPhase::Failed
        } else if self.timestamp == 0 && self.data.is_empty() {
            FetchPhase::Idle
        } else {
            FetchPhase::Populated
        }
    }
}
