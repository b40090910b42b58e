//! Configuration management for the library catalog

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON seed file; the built-in seed set is used when absent
    pub seed_path: Option<String>,
}

/// Which calendar day a new lending record is stamped with
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    Local,
    Utc,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LendingConfig {
    pub clock: ClockMode,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub lending: LendingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("lending.clock", "local")?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix LIBRARY_CATALOG__)
            .add_source(
                Environment::with_prefix("LIBRARY_CATALOG")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override the seed file from CATALOG_SEED_PATH if present
            .set_override_option("catalog.seed_path", env::var("CATALOG_SEED_PATH").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl Default for LendingConfig {
    fn default() -> Self {
        Self {
            clock: ClockMode::Local,
        }
    }
}
