//! 화면 상태와 파생 뷰
//!
//! - 표시 평점: AI 평점과 사용자 평균의 단순 평균
//! - 표시 목록: 분류 필터 후 AI 평점 내림차순 (안정 정렬)
//! - Dashboard: 조회 상태 / 선택 탭 / 리뷰 컬렉션을 소유하는 상태 머신
//!
//! 정렬은 AI 평점만 사용하므로 사용자 리뷰가 표시 평점을 바꿔도 순서는 변하지 않는다.

use crate::error::{Error, Result};
use crate::review::ReviewRepository;
use crate::types::{CategoryFilter, Restaurant, SearchState, UserReview};
use std::cmp::Ordering;

/// 지도 검색 주소 (검색어는 호출 측에서 URL 인코딩해서 붙인다)
pub const MAP_SEARCH_BASE: &str = "https://map.naver.com/v5/search/";

/// 지도 검색어: 이름 뒤에 지역명을 붙인다
pub fn map_search_query(name: &str) -> String {
    format!("{} 대전", name)
}

/// 이름이 완전히 같은 리뷰만 모은다
pub fn reviews_for<'a>(reviews: &'a [UserReview], name: &str) -> Vec<&'a UserReview> {
    reviews.iter().filter(|r| r.restaurant_name == name).collect()
}

/// 표시 평점
///
/// 리뷰가 없으면 AI 평점, 있으면 (AI 평점 + 사용자 평균) / 2. 리뷰 수에 따른 가중치는 없다.
pub fn display_rating(restaurant: &Restaurant, reviews: &[UserReview]) -> f64 {
    let matching = reviews_for(reviews, &restaurant.name);
    if matching.is_empty() {
        return restaurant.ai_rating;
    }
    let sum: f64 = matching.iter().map(|r| f64::from(r.rating)).sum();
    let user_avg = sum / matching.len() as f64;
    (restaurant.ai_rating + user_avg) / 2.0
}

/// 소수점 한 자리 표기
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// 가장 최근 리뷰의 한줄평
pub fn latest_comment<'a>(reviews: &'a [UserReview], name: &str) -> Option<&'a str> {
    reviews
        .iter()
        .rev()
        .find(|r| r.restaurant_name == name)
        .map(|r| r.comment.as_str())
}

/// 필터 후 AI 평점 내림차순 정렬 (동점은 원래 순서 유지)
pub fn visible_restaurants(data: &[Restaurant], filter: CategoryFilter) -> Vec<&Restaurant> {
    let mut visible: Vec<&Restaurant> = data.iter().filter(|r| filter.matches(r.category)).collect();
    visible.sort_by(|a, b| b.ai_rating.partial_cmp(&a.ai_rating).unwrap_or(Ordering::Equal));
    visible
}

/// 화면 상태 머신
///
/// `idle → loading → {populated, failed}`, populated/failed에서 새로고침으로 다시 loading.
pub struct Dashboard<R: ReviewRepository> {
    state: SearchState,
    category: CategoryFilter,
    reviews: Vec<UserReview>,
    repository: R,
}

impl<R: ReviewRepository> Dashboard<R> {
    pub fn new(repository: R) -> Self {
        Self {
            state: SearchState::default(),
            category: CategoryFilter::All,
            reviews: Vec::new(),
            repository,
        }
    }

    /// 저장된 리뷰를 읽는다 (시작 시 1회)
    ///
    /// 읽기에 실패하면 로그만 남기고 빈 컬렉션으로 시작한다.
    pub fn load_reviews(&mut self) {
        match self.repository.load() {
            Ok(reviews) => self.reviews = reviews,
            Err(e) => {
                tracing::error!(error = %e, "failed to load stored reviews");
                self.reviews = Vec::new();
            }
        }
    }

    /// 조회 시작
    ///
    /// 이미 조회 중이면 false를 돌려주고 아무것도 하지 않는다.
    pub fn begin_refresh(&mut self) -> bool {
        if self.state.loading {
            return false;
        }
        self.state.loading = true;
        self.state.error = None;
        true
    }

    /// 조회 완료
    ///
    /// 성공하면 목록을 교체하고, 실패하면 목록을 비우고 사용자용 문구를 남긴다.
    pub fn complete_refresh(&mut self, result: Result<Vec<Restaurant>>, now_ms: i64) {
        self.state = match result {
            Ok(data) => SearchState {
                loading: false,
                error: None,
                data,
                timestamp: now_ms,
            },
            Err(e) => {
                tracing::error!(error = %e, "restaurant fetch failed");
                SearchState {
                    loading: false,
                    error: Some(e.user_message().to_string()),
                    data: Vec::new(),
                    timestamp: self.state.timestamp,
                }
            }
        };
    }

    /// 탭 선택 (다시 조회하지 않음)
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// 리뷰 등록
    ///
    /// 저장소에 먼저 기록하고, 성공하면 화면용 컬렉션에 추가한다.
    pub fn submit_review(
        &mut self,
        restaurant_name: &str,
        rating: u8,
        comment: &str,
        now_ms: i64,
    ) -> Result<UserReview> {
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(Error::EmptyComment);
        }
        let review = UserReview::new(restaurant_name, rating, comment, now_ms)?;
        self.repository.append(&review)?;
        self.reviews.push(review.clone());
        Ok(review)
    }

    pub fn visible(&self) -> Vec<&Restaurant> {
        visible_restaurants(&self.state.data, self.category)
    }

    pub fn display_rating(&self, restaurant: &Restaurant) -> f64 {
        display_rating(restaurant, &self.reviews)
    }

    pub fn latest_comment(&self, name: &str) -> Option<&str> {
        latest_comment(&self.reviews, name)
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn reviews(&self) -> &[UserReview] {
        &self.reviews
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::MemoryReviewRepository;
    use crate::types::{Category, FetchPhase};

    fn restaurant(name: &str, category: Category, rating: f64) -> Restaurant {
        Restaurant {
            id: format!("gemini-{}-0", name),
            name: name.to_string(),
            category,
            distance: "근처".to_string(),
            ai_rating: rating,
            ai_summary: "정보 없음".to_string(),
            keywords: Vec::new(),
            address: String::new(),
        }
    }

    fn review(name: &str, rating: u8, ts: i64) -> UserReview {
        UserReview::new(name, rating, format!("comment {}", ts), ts).unwrap()
    }

    // =============================================
    // 표시 평점
    // =============================================

    #[test]
    fn test_display_rating_without_reviews() {
        let r = restaurant("Foo", Category::Korean, 4.6);
        assert_eq!(display_rating(&r, &[]), 4.6);
        assert_eq!(display_rating(&r, &[review("Bar", 1, 1)]), 4.6);
    }

    #[test]
    fn test_display_rating_with_reviews() {
        let r = restaurant("Foo", Category::Korean, 4.0);
        let reviews = vec![review("Foo", 5, 1), review("Foo", 2, 2), review("Bar", 1, 3)];
        // 사용자 평균 3.5 → (4.0 + 3.5) / 2
        assert!((display_rating(&r, &reviews) - 3.75).abs() < 1e-9);
    }

    #[test]
    fn test_display_rating_exact_name_match() {
        let r = restaurant("Foo", Category::Korean, 4.0);
        let reviews = vec![review("foo", 1, 1), review("Foo ", 1, 2)];
        assert_eq!(display_rating(&r, &reviews), 4.0);
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.3), "4.3");
        assert_eq!(format_rating(4.0), "4.0");
        assert_eq!(format_rating(3.75), "3.8");
    }

    #[test]
    fn test_map_search_query() {
        assert_eq!(map_search_query("진로집"), "진로집 대전");
    }

    #[test]
    fn test_latest_comment() {
        let reviews = vec![review("Foo", 5, 1), review("Bar", 3, 2), review("Foo", 4, 3)];
        assert_eq!(latest_comment(&reviews, "Foo"), Some("comment 3"));
        assert_eq!(latest_comment(&reviews, "Baz"), None);
    }

    // =============================================
    // 표시 목록
    // =============================================

    #[test]
    fn test_visible_sorted_by_ai_rating_desc() {
        let data = vec![
            restaurant("a", Category::Korean, 3.0),
            restaurant("b", Category::Chinese, 4.5),
            restaurant("c", Category::Korean, 4.0),
        ];
        let names: Vec<&str> = visible_restaurants(&data, CategoryFilter::All)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_visible_ties_keep_input_order() {
        let data = vec![
            restaurant("first", Category::Korean, 4.0),
            restaurant("top", Category::Korean, 4.8),
            restaurant("second", Category::Korean, 4.0),
            restaurant("third", Category::Korean, 4.0),
        ];
        let names: Vec<&str> = visible_restaurants(&data, CategoryFilter::All)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_visible_signed_zero_is_a_tie() {
        let data = vec![
            restaurant("first", Category::Korean, -0.0),
            restaurant("second", Category::Korean, 0.0),
        ];
        let names: Vec<&str> = visible_restaurants(&data, CategoryFilter::All)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_visible_filters_category() {
        let data = vec![
            restaurant("a", Category::Korean, 3.0),
            restaurant("b", Category::Chinese, 4.5),
            restaurant("c", Category::Korean, 4.0),
        ];
        let korean = visible_restaurants(&data, CategoryFilter::Only(Category::Korean));
        assert_eq!(korean.len(), 2);
        assert!(korean.iter().all(|r| r.category == Category::Korean));
        assert!(visible_restaurants(&data, CategoryFilter::Only(Category::Snack)).is_empty());
    }

    // =============================================
    // Dashboard
    // =============================================

    #[test]
    fn test_dashboard_refresh_cycle() {
        let mut dash = Dashboard::new(MemoryReviewRepository::new());
        assert_eq!(dash.state().phase(), FetchPhase::Idle);

        assert!(dash.begin_refresh());
        assert_eq!(dash.state().phase(), FetchPhase::Loading);
        assert!(!dash.begin_refresh(), "refresh must be ignored while loading");

        dash.complete_refresh(Ok(vec![restaurant("a", Category::Korean, 4.0)]), 100);
        assert_eq!(dash.state().phase(), FetchPhase::Populated);
        assert_eq!(dash.state().timestamp, 100);
        assert_eq!(dash.visible().len(), 1);

        assert!(dash.begin_refresh());
        dash.complete_refresh(Err(Error::AllModelsFailed { attempts: 3, reasons: Vec::new() }), 200);
        assert_eq!(dash.state().phase(), FetchPhase::Failed);
        assert_eq!(dash.state().error.as_deref(), Some(crate::error::RETRY_MESSAGE));
        assert!(dash.state().data.is_empty());
        assert_eq!(dash.state().timestamp, 100);

        assert!(dash.begin_refresh());
        assert_eq!(dash.state().error, None);
    }

    #[test]
    fn test_dashboard_missing_key_message() {
        let mut dash = Dashboard::new(MemoryReviewRepository::new());
        dash.begin_refresh();
        dash.complete_refresh(Err(Error::MissingApiKey), 1);
        assert_eq!(dash.state().error.as_deref(), Some(crate::error::MISSING_KEY_MESSAGE));
    }

    #[test]
    fn test_dashboard_category_selection_does_not_refetch() {
        let mut dash = Dashboard::new(MemoryReviewRepository::new());
        dash.begin_refresh();
        dash.complete_refresh(
            Ok(vec![
                restaurant("a", Category::Korean, 4.0),
                restaurant("b", Category::Western, 3.0),
            ]),
            1,
        );
        dash.select_category(CategoryFilter::Only(Category::Western));
        assert_eq!(dash.category(), CategoryFilter::Only(Category::Western));
        assert_eq!(dash.visible().len(), 1);
        assert_eq!(dash.state().phase(), FetchPhase::Populated);
    }

    #[test]
    fn test_dashboard_loads_persisted_reviews() {
        let repo = MemoryReviewRepository::with_reviews(vec![review("Foo", 5, 1)]);
        let mut dash = Dashboard::new(repo);
        assert!(dash.reviews().is_empty());
        dash.load_reviews();
        assert_eq!(dash.reviews().len(), 1);
    }

    #[test]
    fn test_dashboard_submit_review_updates_rating() {
        let mut dash = Dashboard::new(MemoryReviewRepository::new());
        dash.begin_refresh();
        dash.complete_refresh(Ok(vec![restaurant("Foo", Category::Korean, 4.6)]), 1);

        let foo = dash.visible()[0].clone();
        assert_eq!(format_rating(dash.display_rating(&foo)), "4.6");

        dash.submit_review("Foo", 4, "맛있어요", 2).unwrap();
        assert!((dash.display_rating(&foo) - 4.3).abs() < 1e-9);
        assert_eq!(format_rating(dash.display_rating(&foo)), "4.3");
        assert_eq!(dash.repository().len(), 1);
        assert_eq!(dash.latest_comment("Foo"), Some("맛있어요"));
    }

    #[test]
    fn test_dashboard_submit_review_validation() {
        let mut dash = Dashboard::new(MemoryReviewRepository::new());
        assert!(matches!(dash.submit_review("Foo", 9, "x", 1), Err(Error::InvalidRating(9))));
        assert!(matches!(dash.submit_review("Foo", 3, "   ", 1), Err(Error::EmptyComment)));
        assert!(dash.reviews().is_empty());
        assert!(dash.repository().is_empty());
    }

    #[test]
    fn test_dashboard_sort_ignores_user_reviews() {
        let mut dash = Dashboard::new(MemoryReviewRepository::new());
        dash.begin_refresh();
        dash.complete_refresh(
            Ok(vec![
                restaurant("high", Category::Korean, 4.5),
                restaurant("low", Category::Korean, 3.0),
            ]),
            1,
        );
        dash.submit_review("low", 5, "great", 2).unwrap();
        dash.submit_review("high", 1, "bad", 3).unwrap();
        let names: Vec<&str> = dash.visible().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["high", "low"]);
    }
}
