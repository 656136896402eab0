//! Item model
//!
//! An item is a single income or outcome record. Its direction comes from the
//! category it belongs to; the stored amount is always positive.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, CategoryType};
use super::ids::{CategoryId, ItemId};
use super::money::Money;

/// A recorded line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,

    /// Short description
    pub title: String,

    /// Amount (always positive)
    #[serde(rename = "price")]
    pub amount: Money,

    /// Day the item happened
    pub date: NaiveDate,

    /// Category this item belongs to
    pub cid: CategoryId,

    /// When the item was created
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// When the item was last modified
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item from validated form data
    pub fn new(draft: ItemDraft, cid: CategoryId) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::new(),
            title: draft.title,
            amount: draft.amount,
            date: draft.date,
            cid,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields
    pub fn apply(&mut self, draft: ItemDraft, cid: CategoryId) {
        self.title = draft.title;
        self.amount = draft.amount;
        self.date = draft.date;
        self.cid = cid;
        self.updated_at = Utc::now();
    }

    /// Amount signed by direction: income positive, outcome negative
    pub fn signed_amount(&self, kind: CategoryType) -> Money {
        match kind {
            CategoryType::Income => self.amount,
            CategoryType::Outcome => -self.amount,
        }
    }

    /// Human-readable summary of what changed between two versions
    pub fn diff_summary(before: &Item, after: &Item) -> Option<String> {
        let mut changes = Vec::new();
        if before.title != after.title {
            changes.push(format!("title: {} -> {}", before.title, after.title));
        }
        if before.amount != after.amount {
            changes.push(format!("amount: {} -> {}", before.amount, after.amount));
        }
        if before.date != after.date {
            changes.push(format!("date: {} -> {}", before.date, after.date));
        }
        if before.cid != after.cid {
            changes.push(format!("category: {} -> {}", before.cid, after.cid));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.title, self.amount)
    }
}

/// The user-editable part of an item, produced by the editor form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    pub amount: Money,
    pub date: NaiveDate,
}

impl ItemDraft {
    /// Validate the draft
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.title.trim().is_empty() {
            return Err(ItemValidationError::EmptyTitle);
        }

        if self.title.len() > 100 {
            return Err(ItemValidationError::TitleTooLong(self.title.len()));
        }

        if !self.amount.is_positive() {
            return Err(ItemValidationError::NonPositiveAmount);
        }

        Ok(())
    }
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            amount: item.amount,
            date: item.date,
        }
    }
}

/// Validation errors for items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyTitle,
    TitleTooLong(usize),
    NonPositiveAmount,
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Title cannot be empty"),
            Self::TitleTooLong(len) => write!(f, "Title too long ({} chars, max 100)", len),
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
        }
    }
}

impl std::error::Error for ItemValidationError {}

/// Income and outcome sums over a set of items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub outcome: Money,
}

impl Totals {
    /// Sum items by the type of their category; items without one are skipped
    pub fn of<'a>(items: impl IntoIterator<Item = &'a Item>, categories: &[Category]) -> Self {
        let mut totals = Self::default();
        for item in items {
            match categories.iter().find(|c| c.id == item.cid).map(|c| c.kind) {
                Some(CategoryType::Income) => totals.income += item.amount,
                Some(CategoryType::Outcome) => totals.outcome += item.amount,
                None => {}
            }
        }
        totals
    }

    /// Income minus outcome
    pub fn balance(&self) -> Money {
        self.income - self.outcome
    }
}
