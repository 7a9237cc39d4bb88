//! 내장 대체 데이터
//!
//! 모든 모델이 실패하고 FallbackPolicy::BuiltIn 일 때만 사용된다.

use crate::types::RawRestaurant;

/// (이름, 분류, 거리, 평점, 요약, 키워드, 주소)
type Entry = (&'static str, &'static str, &'static str, f64, &'static str, &'static [&'static str], &'static str);

const ENTRIES: &[Entry] = &[
    (
        "도룡동 손칼국수",
        "한식",
        "자차 5분",
        4.5,
        "직접 뽑은 면과 진한 멸치 육수가 인기이며 점심시간에는 대기가 있는 편입니다.",
        &["칼국수", "보쌈", "점심 웨이팅"],
        "대전 유성구 도룡동",
    ),
    (
        "신성 순두부",
        "한식",
        "자차 4분",
        4.3,
        "얼큰한 해물순두부와 돌솥밥이 대표 메뉴로 혼밥하기 좋습니다.",
        &["순두부", "돌솥밥", "혼밥"],
        "대전 유성구 신성동",
    ),
    (
        "연구단지 중화요리",
        "중식",
        "자차 8분",
        4.1,
        "짬뽕 국물이 진하고 탕수육 양이 넉넉해 팀 점심으로 자주 찾습니다.",
        &["짬뽕", "탕수육", "단체석"],
        "대전 유성구 어은동",
    ),
    (
        "엑스포 파스타",
        "양식",
        "자차 10분",
        4.0,
        "크림 파스타와 화덕 피자가 무난하며 조용한 분위기라 회의 겸 식사에 적합합니다.",
        &["파스타", "피자", "조용함"],
        "대전 유성구 도룡동",
    ),
    (
        "궁동 떡볶이",
        "분식",
        "자차 12분",
        3.9,
        "달달한 국물떡볶이와 튀김 세트가 가성비 좋다는 평이 많습니다.",
        &["떡볶이", "튀김", "가성비"],
        "대전 유성구 궁동",
    ),
    (
        "가정동 쌀국수",
        "기타",
        "자차 6분",
        4.2,
        "양지 쌀국수와 분짜가 깔끔하고 회전이 빨라 짧은 점심에 좋습니다.",
        &["쌀국수", "분짜", "빠른 회전"],
        "대전 유성구 가정동",
    ),
];

/// 내장 대체 목록
pub fn builtin_restaurants() -> Vec<RawRestaurant> {
    ENTRIES
        .iter()
        .map(|(name, category, distance, rating, summary, keywords, address)| RawRestaurant {
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            distance: Some(distance.to_string()),
            ai_rating: Some(*rating),
            ai_summary: Some(summary.to_string()),
            keywords: Some(keywords.iter().map(|k| k.to_string()).collect()),
            address: Some(address.to_string()),
        })
        .collect()
}
