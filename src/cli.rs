use clap::{Parser, Subcommand};
use gourmet_common::CategoryFilter;

#[derive(Parser)]
#[command(name = "gourmet")]
#[command(about = "한국연구재단 주변 점심 맛집 AI 추천", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 모든 모델이 실패하면 내장 데이터 사용
    #[arg(long, global = true)]
    pub fallback: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 맛집 목록을 한 번 조회해서 출력
    List {
        /// 분류 (all/korean/chinese/western/snack/other 또는 한식 등)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 대화형으로 조회/필터/리뷰 작성
    Browse,

    /// 리뷰 작성 (조회 없이)
    Review {
        /// 맛집 이름 (목록의 이름과 정확히 같아야 평점에 반영됨)
        #[arg(required = true)]
        name: String,

        /// 별점 (1-5)
        #[arg(short, long, default_value = "5", value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,

        /// 한줄평
        #[arg(short = 'm', long)]
        comment: String,
    },

    /// 저장된 리뷰 보기
    Reviews {
        /// 특정 맛집만
        name: Option<String>,
    },

    /// 설정 보기/편집
    Config {
        /// API 키 저장
        #[arg(long)]
        set_api_key: Option<String>,

        /// 설정 보기
        #[arg(long)]
        show: bool,
    },
}
