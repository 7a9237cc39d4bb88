//! 대화형 탐색
//!
//! 조회 → [탭 선택 / 새로고침 / 리뷰 작성 / 종료] 반복

use crate::app::{now_ms, refresh};
use crate::error::Result;
use crate::render::print_dashboard;
use dialoguer::{Input, Select};
use gourmet_common::{CategoryFilter, Dashboard, FetchOptions, GenerativeClient, ReviewRepository};

/// 메뉴 항목
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    SelectCategory,
    Refresh,
    WriteReview,
    Quit,
}

impl BrowseAction {
    const ALL: [BrowseAction; 4] = [
        BrowseAction::SelectCategory,
        BrowseAction::Refresh,
        BrowseAction::WriteReview,
        BrowseAction::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            BrowseAction::SelectCategory => "카테고리 선택",
            BrowseAction::Refresh => "목록 새로고침",
            BrowseAction::WriteReview => "리뷰 작성하기",
            BrowseAction::Quit => "종료",
        }
    }
}

pub async fn run_browse<C, R>(
    dashboard: &mut Dashboard<R>,
    client: &C,
    options: &FetchOptions,
) -> Result<()>
where
    C: GenerativeClient,
    R: ReviewRepository,
{
    dashboard.load_reviews();
    refresh(dashboard, client, options, true).await;
    print_dashboard(dashboard);

    loop {
        let labels: Vec<&str> = BrowseAction::ALL.iter().map(|a| a.label()).collect();
        let choice = Select::new()
            .with_prompt("무엇을 할까요?")
            .items(&labels)
            .default(0)
            .interact()?;

        match BrowseAction::ALL[choice] {
            BrowseAction::SelectCategory => {
                let tabs = CategoryFilter::tabs();
                let tab_labels: Vec<&str> = tabs.iter().map(|t| t.label()).collect();
                let current = tabs.iter().position(|t| *t == dashboard.category()).unwrap_or(0);
                let picked = Select::new()
                    .with_prompt("카테고리")
                    .items(&tab_labels)
                    .default(current)
                    .interact()?;
                dashboard.select_category(tabs[picked]);
                print_dashboard(dashboard);
            }
            BrowseAction::Refresh => {
                refresh(dashboard, client, options, true).await;
                print_dashboard(dashboard);
            }
            BrowseAction::WriteReview => {
                write_review(dashboard)?;
            }
            BrowseAction::Quit => break,
        }
    }

    Ok(())
}

fn write_review<R: ReviewRepository>(dashboard: &mut Dashboard<R>) -> Result<()> {
    let names: Vec<String> = dashboard.visible().iter().map(|r| r.name.clone()).collect();
    if names.is_empty() {
        println!("리뷰를 작성할 맛집이 없습니다.");
        return Ok(());
    }

    let target = Select::new()
        .with_prompt("리뷰 작성")
        .items(&names)
        .default(0)
        .interact()?;

    let stars: Vec<String> = (1..=5).rev().map(|n| "★".repeat(n)).collect();
    let star_index = Select::new()
        .with_prompt("별점")
        .items(&stars)
        .default(0)
        .interact()?;
    let rating = (5 - star_index) as u8;

    let comment: String = Input::new()
        .with_prompt("한줄평")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("맛, 분위기, 서비스에 대한 솔직한 후기를 남겨주세요.")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let review = dashboard.submit_review(&names[target], rating, &comment, now_ms())?;
    println!("✔ 리뷰가 등록되었습니다: {} ({}점)", review.restaurant_name, review.rating);
    print_dashboard(dashboard);
    Ok(())
}
