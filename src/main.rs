use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use vacation_planner::core::config::{self, PlannerConfig};
use vacation_planner::core::{IndicatorStatus, PlaceStore};
use vacation_planner::indicator::MindicadorClient;

#[derive(Parser)]
#[command(name = "vacation-planner", about = "Vacation visit planner")]
struct Args {
    /// Base URL of the mindicador API
    #[arg(long)]
    indicator_url: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (PlannerConfig::default(), Some(e)),
    };
    let config = config::resolve(
        &file_config,
        args.indicator_url.as_deref(),
        args.log_level.as_deref(),
    );

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "Vacation planner starting up, indicators from {}",
        config.indicator_base_url
    );

    let source = Arc::new(MindicadorClient::new(Some(config.indicator_base_url.clone())));
    let store = PlaceStore::new(source);

    match store.indicator_settled().await {
        IndicatorStatus::Loaded => {
            let state = store.snapshot();
            let as_of = state
                .rate_updated_at
                .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_default();
            println!("Dollar: {:.2} CLP ({})", state.exchange_rate, as_of);
        }
        IndicatorStatus::Failed(e) => {
            println!("Dollar value unavailable: {}", e);
        }
        IndicatorStatus::Pending => {}
    }

    log::info!("Vacation planner shutting down");
    Ok(())
}
