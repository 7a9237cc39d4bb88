//! 리뷰 저장소
//!
//! 리뷰 컬렉션은 명시적으로 주입되는 저장소를 통해서만 읽고 쓴다.
//! append는 항상 전체 컬렉션을 다시 기록한다 (마지막 쓰기 우선, 트랜잭션 없음).

use crate::error::Result;
use crate::types::UserReview;

/// 리뷰 저장소 인터페이스
pub trait ReviewRepository {
    /// 저장된 리뷰 전체를 작성 순서대로 읽는다
    fn load(&self) -> Result<Vec<UserReview>>;

    /// 리뷰 하나를 추가하고 전체 컬렉션을 저장한다
    fn append(&mut self, review: &UserReview) -> Result<()>;
}

/// 메모리 저장소 (테스트 및 저장소가 없는 환경용)
#[derive(Debug, Clone, Default)]
pub struct MemoryReviewRepository {
    reviews: Vec<UserReview>,
}

impl MemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reviews(reviews: Vec<UserReview>) -> Self {
        Self { reviews }
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

impl ReviewRepository for MemoryReviewRepository {
    fn load(&self) -> Result<Vec<UserReview>> {
        Ok(self.reviews.clone())
    }

    fn append(&mut self, review: &UserReview) -> Result<()> {
        self.reviews.push(review.clone());
        Ok(())
    }
}

/// 저장된 JSON 문자열을 리뷰 목록으로 파싱
///
/// 파일/localStorage 구현이 같은 형식을 쓰도록 공유한다.
pub fn parse_review_collection(json: &str) -> Result<Vec<UserReview>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(json)?)
}

/// 리뷰 목록을 저장용 JSON 문자열로 직렬화
pub fn serialize_review_collection(reviews: &[UserReview]) -> Result<String> {
    Ok(serde_json::to_string(reviews)?)
}
