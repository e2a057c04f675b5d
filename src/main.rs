//! contribcache CLI - print a contribution heatmap for an entity and year.
//!
//! Usage: `contribcache <entity> [year]`. The entity may also come from the
//! config file's `default_entity`; the year defaults to the current year.

use std::io;

use anyhow::Result;
use chrono::Datelike;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use contribcache::api::ContributionClient;
use contribcache::cache::{ContributionCache, FileStore};
use contribcache::color::level_color;
use contribcache::config::Config;
use contribcache::grid::{build_week_grid, WeekGrid};
use contribcache::models::ContributionDay;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::load().unwrap_or_default();

    let args: Vec<String> = std::env::args().collect();
    let entity = args
        .get(1)
        .cloned()
        .or_else(|| config.default_entity.clone())
        .ok_or_else(|| anyhow::anyhow!("Usage: contribcache <entity> [year]"))?;
    let year = match args.get(2) {
        Some(raw) => raw.parse()?,
        None => chrono::Utc::now().year(),
    };

    info!(entity = %entity, year, "Loading contributions");

    let store = FileStore::new(config.cache_dir()?)?;
    let cache = ContributionCache::new(Box::new(store));
    let client = match &config.base_url {
        Some(base_url) => ContributionClient::with_base_url(cache, base_url)?,
        None => ContributionClient::new(cache)?,
    };

    let data = client.load(&entity, year).await?;

    // Remember the last entity that loaded successfully.
    if config.default_entity.as_deref() != Some(entity.as_str()) {
        let mut updated = config.clone();
        updated.default_entity = Some(entity.clone());
        if let Err(e) = updated.save() {
            warn!(error = %e, "Failed to save config");
        }
    }

    let grid = build_week_grid(&data.contributions, year);

    print_heatmap(&grid);
    println!(
        "\n{} contributions in {} for {}",
        data.total_for(year),
        year,
        entity
    );

    Ok(())
}

/// Print the grid as one terminal row per weekday, one column per week.
fn print_heatmap(grid: &WeekGrid) {
    for slot in 0..7 {
        let row: String = grid.iter().map(|week| cell_block(&week[slot])).collect();
        println!("{}", row);
    }
}

fn cell_block(cell: &ContributionDay) -> String {
    let (r, g, b) = hex_to_rgb(level_color(cell.level));
    format!("\x1b[38;2;{};{};{}m\u{25a0} \x1b[0m", r, g, b)
}

fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    let parse = |range| u8::from_str_radix(hex.get(range).unwrap_or("00"), 16).unwrap_or(0);
    (parse(0..2), parse(2..4), parse(4..6))
}
