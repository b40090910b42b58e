//! Library catalog core
//!
//! An in-process library catalog: it lists books, answers genre/text/sort
//! queries and applies validated borrow transactions. Rendering is left to
//! whatever UI sits on top.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult, BorrowError};

use repository::{Repository, SeedData};
use services::{
    lending::{Clock, SystemClock},
    Services,
};

/// Application state shared by every consumer of the catalog
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: Repository,
    pub services: Arc<Services>,
}

impl AppState {
    /// Load the configured seed and wire the services with the system clock
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let clock = SystemClock {
            mode: config.lending.clock,
        };
        Self::with_clock(config, Arc::new(clock))
    }

    /// Same as [`AppState::new`] but stamps lending records with `clock`
    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let repository = Self::load_repository(&config)?;
        let services = Services::with_clock(repository.clone(), clock);
        Ok(Self {
            config: Arc::new(config),
            repository,
            services: Arc::new(services),
        })
    }

    fn load_repository(config: &AppConfig) -> AppResult<Repository> {
        let seed = SeedData::load(config.catalog.seed_path.as_deref())?;
        Repository::new(seed)
    }
}
