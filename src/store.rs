//! 리뷰 파일 저장소
//!
//! JSON 배열 하나에 전체 리뷰를 저장한다. 추가할 때마다 전체를 다시 쓴다.

use gourmet_common::review::{parse_review_collection, serialize_review_collection};
use gourmet_common::{Error, Result, ReviewRepository, UserReview};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileReviewStore {
    path: PathBuf,
}

impl FileReviewStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self, reviews: &[UserReview]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(storage_error)?;
        }
        let json = serialize_review_collection(reviews)?;
        std::fs::write(&self.path, json).map_err(storage_error)
    }
}

impl ReviewRepository for FileReviewStore {
    fn load(&self) -> Result<Vec<UserReview>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(storage_error)?;
        parse_review_collection(&content)
    }

    fn append(&mut self, review: &UserReview) -> Result<()> {
        let mut reviews = match self.load() {
            Ok(reviews) => reviews,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "stored reviews unreadable, starting over");
                Vec::new()
            }
        };
        reviews.push(review.clone());
        self.write_all(&reviews)?;
        tracing::debug!(path = %self.path.display(), count = reviews.len(), "reviews saved");
        Ok(())
    }
}

fn storage_error(e: std::io::Error) -> Error {
    Error::Storage(e.to_string())
}
