//! AI 응답 파서
//!
//! 응답 텍스트에서 JSON을 꺼내고, 맛집 배열을 RawRestaurant로 디코딩한다.
//! 기본값 채우기는 여기서 하지 않는다 (normalize 모듈 담당).

use crate::error::{Error, Result};
use crate::types::RawRestaurant;
use serde_json::{Map, Value};

const FENCE: &str = "```";

/// 맛집 배열을 담는 필드명
pub const RESTAURANTS_KEY: &str = "restaurants";

/// 응답 텍스트에서 JSON 값을 추출
///
/// 추출 순서:
/// 1. 텍스트 전체를 그대로 파싱
/// 2. ```json ... ``` 블록
/// 3. 임의의 ``` ... ``` 블록 (앞에서부터, 처음 파싱되는 것)
/// 4. 에러
///
/// # Examples
/// ```
/// use gourmet_common::extract_json;
///
/// let value = extract_json("```json\n{\"restaurants\": []}\n```").unwrap();
/// assert!(value["restaurants"].is_array());
/// ```
pub fn extract_json(text: &str) -> Result<Value> {
    let trimmed = text.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Ok(value);
    }

    if let Some(start_marker) = trimmed.find("```json") {
        let start = start_marker + "```json".len();
        if let Some(end_offset) = trimmed[start..].find(FENCE) {
            let body = &trimmed[start..start + end_offset];
            if let Ok(value) = serde_json::from_str::<Value>(body.trim()) {
                return Ok(value);
            }
        }
    }

    for body in fenced_blocks(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(body.trim()) {
            return Ok(value);
        }
    }

    Err(Error::Parse("Failed to parse JSON from response".into()))
}

/// ``` 로 감싼 블록의 본문을 앞에서부터 나열
///
/// 여는 펜스: 같은 줄에 언어 태그(생략 가능)만 오는 ```.
/// 닫는 펜스: 줄 맨 앞의 ```. 본문 앞의 산문 속 ``` 는 건너뛴다.
fn fenced_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut from = 0;

    while let Some(found) = text[from..].find(FENCE) {
        let open = from + found;
        from = open + FENCE.len();

        let after_open = &text[from..];
        let Some(nl) = after_open.find('\n') else {
            break;
        };
        if !is_info_string(&after_open[..nl]) {
            continue;
        }

        let body_start = from + nl + 1;
        let Some(close) = closing_fence(&text[body_start..]) else {
            continue;
        };
        blocks.push(&text[body_start..body_start + close]);
        from = body_start + close + FENCE.len();
    }

    blocks
}

/// 펜스 뒤 같은 줄이 언어 태그(또는 공백)뿐인지
fn is_info_string(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
}

/// 줄 맨 앞에 오는 첫 ``` 의 위치
fn closing_fence(body: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(found) = body[from..].find(FENCE) {
        let pos = from + found;
        let line_prefix = body[..pos].rsplit('\n').next().unwrap_or("");
        if line_prefix.trim().is_empty() {
            return Some(pos);
        }
        from = pos + FENCE.len();
    }
    None
}

/// 응답 텍스트를 RawRestaurant 목록으로 디코딩
///
/// # Returns
/// * `Err(EmptyResponse)` - 텍스트가 비어 있음
/// * `Err(Parse)` - JSON을 찾지 못함
/// * `Err(InvalidStructure)` - `restaurants` 배열이 없음
pub fn decode_restaurants(text: &str) -> Result<Vec<RawRestaurant>> {
    if text.trim().is_empty() {
        return Err(Error::EmptyResponse);
    }

    let value = extract_json(text)?;
    let items = value
        .get(RESTAURANTS_KEY)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            Error::InvalidStructure(format!("\"{}\" array is missing", RESTAURANTS_KEY))
        })?;

    Ok(items.iter().map(decode_item).collect())
}

/// 항목 하나를 필드 단위로 관대하게 디코딩
fn decode_item(item: &Value) -> RawRestaurant {
    let Some(map) = item.as_object() else {
        return RawRestaurant::default();
    };

    RawRestaurant {
        name: get_string(map, "name"),
        category: get_string(map, "category"),
        distance: get_string(map, "distance"),
        ai_rating: get_f64(map, "aiRating"),
        ai_summary: get_string(map, "aiSummary"),
        keywords: get_string_list(map, "keywords"),
        address: get_string(map, "address"),
    }
}

fn get_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    let value = map.get(key)?;
    if let Some(s) = value.as_str() {
        return Some(s.to_string());
    }
    if value.is_null() {
        return None;
    }
    Some(value.to_string())
}

fn get_f64(map: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = map.get(key)?;
    if let Some(n) = value.as_f64() {
        return Some(n);
    }
    value.as_str().and_then(|s| s.trim().parse::<f64>().ok())
}

fn get_string_list(map: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let array = map.get(key)?.as_array()?;
    Some(
        array
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
    )
}
