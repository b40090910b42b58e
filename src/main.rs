//! Library catalog bootstrap
//!
//! Loads configuration and the seed catalog, checks it, and logs a summary.

use anyhow::Context;

use library_catalog::{config::AppConfig, logging, AppState};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    logging::init(&config.logging).context("failed to initialize logging")?;

    tracing::info!("Starting library catalog v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config).context("failed to load catalog")?;

    state
        .repository
        .catalog
        .verify_consistency()
        .context("catalog failed consistency check")?;

    let available = state
        .services
        .catalog
        .list_books()
        .iter()
        .filter(|b| b.available)
        .count();

    tracing::info!(
        "Catalog ready: {} books ({} available), {} genres, {} lending records",
        state.repository.catalog.len(),
        available,
        state.services.catalog.genres().len(),
        state.services.catalog.history().len()
    );

    Ok(())
}
