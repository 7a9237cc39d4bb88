//! NRF Gourmet Common Library
//!
//! CLI와 Web(WASM)이 공유하는 타입과 로직

pub mod types;
pub mod error;
pub mod prompts;
pub mod parser;
pub mod normalize;
pub mod fallback;
pub mod gemini;
pub mod fetcher;
pub mod review;
pub mod view;

pub use types::{Category, CategoryFilter, FetchPhase, RawRestaurant, Restaurant, SearchState, UserReview};
pub use error::{Error, Result};
pub use prompts::PromptTemplate;
pub use parser::{decode_restaurants, extract_json};
pub use normalize::normalize_restaurants;
pub use fetcher::{fetch_restaurants, FallbackPolicy, FetchOptions, FetchOutcome, GenerativeClient};
pub use review::{MemoryReviewRepository, ReviewRepository};
pub use view::{display_rating, format_rating, visible_restaurants, Dashboard};
