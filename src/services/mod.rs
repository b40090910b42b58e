//! Business logic services

pub mod catalog;
pub mod collation;
pub mod lending;

use std::sync::Arc;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub lending: lending::LendingService,
}

impl Services {
    /// Create all services over one repository, stamping loans with `clock`
    pub fn with_clock(repository: Repository, clock: Arc<dyn lending::Clock>) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            lending: lending::LendingService::new(repository, clock),
        }
    }
}
