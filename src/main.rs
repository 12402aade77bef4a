//! Rusmark ingest CLI
//!
//! Converts every Rusmark catalog export in the configured directory into a
//! sibling JSON file ready for downstream import.

use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rusmark_ingest::{config::AppConfig, ingest};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("rusmark_ingest={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rusmark ingest v{}", env!("CARGO_PKG_VERSION"));

    let report = ingest::process_dir(Path::new(&config.catalog.dir))?;

    for file in &report.files {
        for warning in &file.warnings {
            tracing::warn!(file = %file.file.display(), "{warning}");
        }
    }

    tracing::info!(
        files = report.files.len(),
        failed = report.failed.len(),
        records = report.records_total(),
        "Ingest finished"
    );

    if !report.failed.is_empty() {
        anyhow::bail!("{} catalog file(s) failed to convert", report.failed.len());
    }

    Ok(())
}
