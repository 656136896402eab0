//! Data store for Pocketbook
//!
//! Holds items and categories in memory for the lifetime of the process.
//! Views read through the repositories' getters; mutation goes through the
//! action set in [`crate::actions`].

pub mod categories;
pub mod file_io;
pub mod items;
pub mod seed;

pub use categories::CategoryRepository;
pub use items::ItemRepository;
pub use seed::{SeedData, SeedSource};

use crate::error::PocketbookError;

/// In-memory store for items and categories
#[derive(Default)]
pub struct DataStore {
    pub items: ItemRepository,
    pub categories: CategoryRepository,
}

impl DataStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store filled from seed data
    pub fn seeded(seed: SeedData) -> Result<Self, PocketbookError> {
        let store = Self::new();
        store.categories.seed(seed.categories)?;
        store.items.seed(seed.items)?;
        Ok(store)
    }
}

pub(crate) fn lock_poisoned<E: std::fmt::Display>(err: E) -> PocketbookError {
    PocketbookError::Storage(format!("Failed to acquire lock: {}", err))
}
