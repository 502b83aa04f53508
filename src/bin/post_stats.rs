//! Post Stats Binary - Average Posts Per User Per Month
//!
//! Reads a JSONL file of social posts and prints, per author, the average
//! number of posts per calendar month over the configured date range.
//!
//! ## Usage
//!
//! ```bash
//! STATS_START_DATE=2018-08-01 STATS_END_DATE=2018-08-31 cargo run --release --bin post_stats
//! ```
//!
//! ## Environment Variables
//!
//! - POSTS_PATH - Path to the posts JSONL file (default: data/posts.jsonl)
//! - STAT_NAME - Statistic label (default: average-posts-per-user)
//! - STATS_START_DATE - Range start, RFC 3339 or YYYY-MM-DD (required)
//! - STATS_END_DATE - Range end, RFC 3339 or YYYY-MM-DD (required)
//! - STATS_OUTPUT_PATH - Write the JSON report here instead of stdout (optional)
//! - RUST_LOG - Logging level (optional, default: info)

use postflow::stats_core::{
    months_spanned, AveragePostsPerUserPerMonth, PostReader, StatsService, WithParameters,
};
use postflow::StatsConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = StatsConfig::from_env()?;

    log::info!("🚀 Starting post statistics");
    log::info!("   Posts: {}", config.posts_path.display());
    log::info!("   Stat: {}", config.stat_name);
    log::info!("   Range: {} .. {}", config.start_date, config.end_date);
    let months: Vec<String> = months_spanned(config.start_date, config.end_date)
        .iter()
        .map(|m| m.to_string())
        .collect();
    log::info!("   Months counted: {} ({})", months.len(), months.join(", "));
    if config.end_date < config.start_date {
        log::warn!("End date is before start date; results will divide by a single month");
    }

    let posts = PostReader::new(config.posts_path.clone()).read_all().await?;

    let calculator = AveragePostsPerUserPerMonth::new().with_parameters(config.params());
    let report = StatsService::new()
        .with_calculator(Box::new(calculator))
        .calculate("post-stats", &posts);

    let json = serde_json::to_string_pretty(&report)?;
    match &config.output_path {
        Some(path) => {
            tokio::fs::write(path, format!("{}\n", json)).await?;
            log::info!("📝 Report written to: {}", path.display());
        }
        None => println!("{}", json),
    }

    log::info!("✅ Done");
    Ok(())
}
