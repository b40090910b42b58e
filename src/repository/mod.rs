//! Repository layer: in-memory catalog storage and its seed data

pub mod catalog;
pub mod seed;

pub use catalog::CatalogStore;
pub use seed::SeedData;

use crate::error::AppResult;

/// Main repository struct holding the catalog store
#[derive(Clone, Debug)]
pub struct Repository {
    pub catalog: CatalogStore,
}

impl Repository {
    /// Create a new repository from seed data
    pub fn new(seed: SeedData) -> AppResult<Self> {
        Ok(Self {
            catalog: CatalogStore::from_seed(seed)?,
        })
    }
}
