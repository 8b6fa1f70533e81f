//! Entry point for the guest-appearance dashboard server.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use guestgraph_common::logging;
use guestgraph_config::{Config, ConfigLoader};
use guestgraph_graphs::DataFetcher;
use guestgraph_server::{router, AppContext};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "guestgraph-server", version, about = "Guest appearance dashboard")]
struct Args {
    /// Configuration file path.
    #[arg(short, long)]
    config: Option<String>,

    /// Log level override (e.g. "debug").
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
    .context("failed to load configuration")?;

    init_logging(&args, &config)?;
    info!("starting guest appearance dashboard");

    let fetcher = DataFetcher::new(
        &config.data.source_url,
        Duration::from_secs(config.data.request_timeout_seconds),
    )?;
    let table = fetcher
        .load()
        .await
        .context("failed to load appearance data")?;
    info!(
        records = table.len(),
        seasons = table.seasons().len(),
        "appearance table ready"
    );

    let ctx = Arc::new(AppContext::new(table, &config.chart));
    let app = router(ctx);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, debug = config.server.debug, "listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Initializes logging. The CLI override wins, then debug mode, then the
/// configured level.
fn init_logging(args: &Args, config: &Config) -> Result<()> {
    let level = match (&args.log_level, config.server.debug) {
        (Some(level), _) => level.clone(),
        (None, true) => "debug".to_string(),
        (None, false) => config.logging.level.clone(),
    };

    logging::init_logging(&logging::LoggingConfig {
        level,
        json_format: config.logging.json,
    })
    .context("failed to initialize logging")?;

    Ok(())
}
