//! localStorage 리뷰 저장소

use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use gourmet_common::{Error, Result, ReviewRepository, UserReview};

/// 리뷰 컬렉션을 저장하는 키
pub const REVIEWS_KEY: &str = "nrf_gourmet_reviews";

#[derive(Debug, Clone)]
pub struct LocalStorageReviewStore {
    key: String,
}

impl Default for LocalStorageReviewStore {
    fn default() -> Self {
        Self { key: REVIEWS_KEY.to_string() }
    }
}

impl LocalStorageReviewStore {
    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ReviewRepository for LocalStorageReviewStore {
    fn load(&self) -> Result<Vec<UserReview>> {
        match LocalStorage::get::<Vec<UserReview>>(&self.key) {
            Ok(reviews) => Ok(reviews),
            Err(StorageError::KeyNotFound(_)) => Ok(Vec::new()),
            Err(e) => {
                gloo::console::error!(format!("저장된 리뷰를 파싱하지 못했습니다: {}", e));
                Err(Error::Storage(e.to_string()))
            }
        }
    }

    fn append(&mut self, review: &UserReview) -> Result<()> {
        let mut reviews = self.load().unwrap_or_else(|e| {
            gloo::console::warn!(format!("저장된 리뷰를 읽지 못해 새로 시작합니다: {}", e));
            Vec::new()
        });
        reviews.push(review.clone());
        LocalStorage::set(&self.key, &reviews).map_err(|e| Error::Storage(e.to_string()))
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_append_then_load() {
        let mut store = LocalStorageReviewStore::with_key("nrf_gourmet_reviews_test");
        LocalStorage::delete("nrf_gourmet_reviews_test");
        assert!(store.load().unwrap().is_empty());

        let review = UserReview::new("진로집", 5, "최고", 1_000).unwrap();
        store.append(&review).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![review]);

        LocalStorage::delete("nrf_gourmet_reviews_test");
    }

    #[wasm_bindgen_test]
    fn wasm_corrupt_value_is_storage_error() {
        let store = LocalStorageReviewStore::with_key("nrf_gourmet_reviews_corrupt");
        LocalStorage::set("nrf_gourmet_reviews_corrupt", "not a list").unwrap();
        assert!(matches!(store.load(), Err(Error::Storage(_))));
        LocalStorage::delete("nrf_gourmet_reviews_corrupt");
    }
}
