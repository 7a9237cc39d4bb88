//! 프롬프트 생성 모듈
//!
//! 맛집 목록을 요청하는 자연어 지시문을 만든다.
//! 출력 스키마(필드명, 분류 라벨, 키워드 배열)와 제약(거리, JSON 출력)을 담는다.

use crate::types::Category;

/// 맛집 조회 프롬프트 템플릿
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    /// 기준 장소
    pub landmark: String,
    /// 주변 지역 이름
    pub area: String,
    pub min_count: u32,
    pub max_count: u32,
    /// 자차 기준 최대 이동 시간(분)
    pub max_drive_minutes: u32,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            landmark: "National Research Foundation of Korea (NRF) in Daejeon".to_string(),
            area: "Sinseong-dong/Doryong-dong area".to_string(),
            min_count: 15,
            max_count: 20,
            max_drive_minutes: 15,
        }
    }
}

impl PromptTemplate {
    /// 프롬프트 문자열 생성
    pub fn render(&self) -> String {
        let categories = Category::ALL
            .iter()
            .map(|c| format!("\"{}\"", c.label()))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"Find {min}-{max} popular lunch restaurants near the "{landmark}" ({area}).
Constraints:
1. Must be within a {minutes}-minute drive from the landmark.
2. Focus on places suitable for employee lunch.
3. Analyze recent reviews from web sources (blogs, maps) to generate a summary.

Output strictly a JSON object with a key "restaurants" containing an array.
Each item must have:
- "name": string (Korean name)
- "category": string (One of: {categories})
- "distance": string (e.g., "자차 5분" or "1.2km")
- "aiRating": number (1.0 to 5.0, estimated based on sentiment)
- "aiSummary": string (A concise 1-2 sentence summary of external reviews emphasizing signature dishes and atmosphere)
- "keywords": array of strings (e.g. ["Clean", "Spicy", "Good Value"])
- "address": string (Approximate address or area name)

Ensure the response is valid JSON, optionally inside a ```json code block."#,
            min = self.min_count,
            max = self.max_count,
            landmark = self.landmark,
            area = self.area,
            minutes = self.max_drive_minutes,
        )
    }
}
