//! Tracing subscriber setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(config: &LoggingConfig) -> String {
    format!("library_catalog={}", config.level)
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(config).into());

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init()?,
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
    }

    Ok(())
}
