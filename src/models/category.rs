//! Category model
//!
//! Every category is either an income or an outcome category; items pick
//! their category from the list matching the selected type.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Whether a category records money coming in or going out
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Income,
    #[default]
    Outcome,
}

impl CategoryType {
    /// Tab order used by the editor
    pub const ALL: [CategoryType; 2] = [CategoryType::Income, CategoryType::Outcome];

    /// Position of this type in [`CategoryType::ALL`]
    pub fn index(self) -> usize {
        match self {
            Self::Income => 0,
            Self::Outcome => 1,
        }
    }

    /// Type at a tab position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Outcome => "Outcome",
        }
    }

    /// The other type
    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Outcome,
            Self::Outcome => Self::Income,
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A user-defined category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Income or outcome
    #[serde(rename = "type")]
    pub kind: CategoryType,

    /// Icon name shown next to the category
    #[serde(default)]
    pub icon: String,

    /// Relative order among all categories
    #[serde(default)]
    pub sort_order: i32,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, kind: CategoryType) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            icon: String::new(),
            sort_order: 0,
        }
    }

    /// Set the icon name
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Keep the categories of one type, preserving their relative order
pub fn filter_by_type<'a, I>(categories: I, kind: CategoryType) -> Vec<&'a Category>
where
    I: IntoIterator<Item = &'a Category>,
{
    categories.into_iter().filter(|c| c.kind == kind).collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
