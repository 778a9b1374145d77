//! Localized event page server - main entry point

use anyhow::{Context, Result};
use clap::Parser;
use locpage_common::{init_logging, LoggingConfig};
use locpage_config::ConfigLoader;
use locpage_i18n::CatalogLoader;
use locpage_server::{build_router, AppState, TemplateEngine};
use std::sync::Arc;
use tracing::{error, info};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Log level, overrides the configured one
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    // Initialize logging
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    init_logging(LoggingConfig {
        level,
        json_format: config.logging.json,
        ..LoggingConfig::default()
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    info!("starting locpage server");
    info!("configuration loaded successfully");

    // Load every locale catalog before accepting any request
    let catalogs = Arc::new(
        CatalogLoader::load(&config.locales.dir, &config.locales.fallback)
            .context("failed to load locale catalogs")?,
    );
    info!(
        locales = catalogs.supported().len(),
        fallback = %catalogs.fallback(),
        "locale catalogs loaded"
    );

    // Load templates and register the locale filters
    let templates = Arc::new(
        TemplateEngine::new(&config.templates.dir, catalogs.clone())
            .context("failed to load templates")?,
    );

    let state = AppState {
        catalogs,
        templates,
    };
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        return;
    }
    info!("received shutdown signal, starting graceful shutdown");
}
