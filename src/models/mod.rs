//! Core data models for Pocketbook
//!
//! Items, categories, money and the id newtypes shared by every layer.

pub mod category;
pub mod ids;
pub mod item;
pub mod money;

pub use category::{filter_by_type, Category, CategoryType};
pub use ids::{CategoryId, ItemId};
pub use item::{Item, ItemDraft, Totals};
pub use money::Money;
