//! Startup seed data
//!
//! The store starts from a seed: an explicit file, the `seed.json` in the
//! data directory, or the built-in demo data.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{PocketbookPaths, Settings};
use crate::error::PocketbookError;
use crate::models::{Category, CategoryType, Item, ItemDraft, Money};

use super::file_io::{read_data_file, write_json_atomic};

/// Categories and items to start the store with
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Where a seed came from, for logging and the `config` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    File(PathBuf),
    Demo,
    Empty,
}

impl std::fmt::Display for SeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Demo => write!(f, "built-in demo data"),
            Self::Empty => write!(f, "empty"),
        }
    }
}

impl SeedData {
    /// Load a seed file (`.json`, `.yaml` or `.yml`)
    pub fn from_file(path: &Path) -> Result<Self, PocketbookError> {
        let seed: SeedData = read_data_file(path)?;
        seed.validate()
            .map_err(|e| PocketbookError::Validation(format!("{}: {}", path.display(), e)))?;
        Ok(seed)
    }

    /// Check categories and reject duplicate ids
    pub fn validate(&self) -> Result<(), String> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            category.validate().map_err(|e| e.to_string())?;
            if !category_ids.insert(category.id) {
                return Err(format!("duplicate category id {}", category.id.to_full_string()));
            }
        }

        let mut item_ids = HashSet::new();
        for item in &self.items {
            if !item_ids.insert(item.id) {
                return Err(format!("duplicate item id {}", item.id.to_full_string()));
            }
        }
        Ok(())
    }

    /// Write this seed as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), PocketbookError> {
        write_json_atomic(path, self)
    }

    /// Built-in demo categories and items
    pub fn demo() -> Self {
        let categories = vec![
            Category::new("Travel", CategoryType::Outcome).with_icon("plane"),
            Category::new("Food", CategoryType::Outcome).with_icon("utensils"),
            Category::new("Shopping", CategoryType::Outcome).with_icon("bag"),
            Category::new("Salary", CategoryType::Income).with_icon("briefcase"),
            Category::new("Investment", CategoryType::Income).with_icon("chart"),
        ];

        let demo_item = |title: &str, cents: i64, (y, m, d): (i32, u32, u32), index: usize| {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);
            Item::new(
                ItemDraft {
                    title: title.to_string(),
                    amount: Money::from_cents(cents),
                    date,
                },
                categories[index].id,
            )
        };

        let items = vec![
            demo_item("Weekend in Lisbon", 42000, (2024, 8, 10), 0),
            demo_item("Groceries", 6350, (2024, 8, 12), 1),
            demo_item("August salary", 320000, (2024, 8, 31), 3),
            demo_item("Running shoes", 11999, (2024, 9, 3), 2),
            demo_item("Dividends", 4820, (2024, 9, 15), 4),
        ];

        Self { categories, items }
    }

    /// Resolve the startup seed
    ///
    /// Precedence: `explicit` path, `settings.seed_file`, `seed.json` in the
    /// data directory, demo data when enabled, otherwise empty.
    pub fn resolve(
        explicit: Option<&Path>,
        settings: &Settings,
        paths: &PocketbookPaths,
    ) -> Result<(Self, SeedSource), PocketbookError> {
        let configured = explicit
            .map(Path::to_path_buf)
            .or_else(|| settings.seed_file.clone());

        if let Some(path) = configured {
            let seed = Self::from_file(&path)?;
            return Ok((seed, SeedSource::File(path)));
        }

        let default_file = paths.seed_file();
        if default_file.exists() {
            let seed = Self::from_file(&default_file)?;
            return Ok((seed, SeedSource::File(default_file)));
        }

        if settings.seed_demo_data {
            Ok((Self::demo(), SeedSource::Demo))
        } else {
            Ok((Self::default(), SeedSource::Empty))
        }
    }
}
