use anyhow::{bail, Context};
use clap::Parser;
use gourmet_common::view::reviews_for;
use gourmet_common::{Dashboard, ReviewRepository};
use nrf_gourmet::{app, browse, cli, client, config, render, store};
use cli::{Cli, Commands};
use client::GeminiClient;
use config::Config;
use store::FileReviewStore;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("설정 파일을 읽지 못했습니다")?;
    let reviews_path = config.reviews_path()?;

    match cli.command {
        Commands::List { category, json } => {
            let client = GeminiClient::from_config(&config)?;
            let options = config.fetch_options(cli.fallback);

            let mut dashboard = Dashboard::new(FileReviewStore::new(&reviews_path));
            dashboard.load_reviews();
            dashboard.select_category(category);
            app::refresh(&mut dashboard, &client, &options, !json).await;

            if let Some(message) = &dashboard.state().error {
                bail!("{}", message);
            }

            if json {
                let visible = dashboard.visible();
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                println!("🍽 NRF Gourmet - {} {}", config.area, config.landmark);
                render::print_dashboard(&dashboard);
            }
        }

        Commands::Browse => {
            let client = GeminiClient::from_config(&config)?;
            let options = config.fetch_options(cli.fallback);

            println!("🍽 NRF Gourmet - {} {}", config.area, config.landmark);
            let mut dashboard = Dashboard::new(FileReviewStore::new(&reviews_path));
            browse::run_browse(&mut dashboard, &client, &options).await?;
        }

        Commands::Review { name, rating, comment } => {
            let mut dashboard = Dashboard::new(FileReviewStore::new(&reviews_path));
            dashboard.load_reviews();
            let review = dashboard
                .submit_review(&name, rating, &comment, app::now_ms())
                .with_context(|| format!("리뷰를 저장하지 못했습니다: {}", reviews_path.display()))?;
            println!(
                "✔ 리뷰가 등록되었습니다: {} {} ({})",
                review.restaurant_name,
                "★".repeat(review.rating as usize),
                review.date
            );
        }

        Commands::Reviews { name } => {
            let store = FileReviewStore::new(&reviews_path);
            let reviews = store
                .load()
                .with_context(|| format!("리뷰 파일을 읽지 못했습니다: {}", reviews_path.display()))?;
            let selected: Vec<_> = match &name {
                Some(name) => reviews_for(&reviews, name),
                None => reviews.iter().collect(),
            };
            render::print_reviews(&selected);
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API 키를 저장했습니다");
            }

            if show {
                println!("설정: {}", Config::config_path()?.display());
                println!("  모델: {}", config.models.join(" → "));
                println!("  기준 위치: {} {}", config.area, config.landmark);
                println!("  검색 그라운딩: {}", if config.search_grounding { "사용" } else { "사용 안 함" });
                println!("  내장 데이터 대체: {}", if config.use_fallback_data { "사용" } else { "사용 안 함" });
                println!("  리뷰 파일: {}", reviews_path.display());
                println!(
                    "  API 키: {}",
                    if config.get_api_key().is_ok() { "설정됨" } else { "미설정" }
                );
            }
        }
    }

    Ok(())
}
