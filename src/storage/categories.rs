//! In-memory category repository
//!
//! Categories are seeded once at startup and never deleted; views read
//! clones ordered by `sort_order`.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::PocketbookError;
use crate::models::{Category, CategoryId, CategoryType};

use super::lock_poisoned;

/// Repository for categories
#[derive(Default)]
pub struct CategoryRepository {
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    /// Create an empty category repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents, keeping the given order as the display order
    pub(crate) fn seed(&self, seeded: Vec<Category>) -> Result<(), PocketbookError> {
        let mut categories = self.categories.write().map_err(lock_poisoned)?;
        categories.clear();
        for (index, mut category) in seeded.into_iter().enumerate() {
            category.sort_order = index as i32;
            categories.insert(category.id, category);
        }
        Ok(())
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, PocketbookError> {
        let categories = self.categories.read().map_err(lock_poisoned)?;
        Ok(categories.get(&id).cloned())
    }

    /// Get all categories in display order
    pub fn get_all(&self) -> Result<Vec<Category>, PocketbookError> {
        let categories = self.categories.read().map_err(lock_poisoned)?;
        let mut list: Vec<_> = categories.values().cloned().collect();
        list.sort_by_key(|c| (c.sort_order, c.name.clone()));
        Ok(list)
    }

    /// Get the categories of one type in display order
    pub fn get_by_type(&self, kind: CategoryType) -> Result<Vec<Category>, PocketbookError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|c| c.kind == kind)
            .collect())
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, PocketbookError> {
        let categories = self.categories.read().map_err(lock_poisoned)?;
        let name_lower = name.to_lowercase();
        Ok(categories
            .values()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Number of categories
    pub fn count(&self) -> Result<usize, PocketbookError> {
        let categories = self.categories.read().map_err(lock_poisoned)?;
        Ok(categories.len())
    }
}
