//! Display formatting for terminal output
//!
//! Renders items, categories and audit entries for the CLI.

pub mod category;
pub mod item;

pub use category::format_category_list;
pub use item::{format_item_details, format_item_list};
