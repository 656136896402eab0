//! CLI command handlers
//!
//! Bridges clap argument parsing with the data store and display layer.

pub mod category;
pub mod item;
pub mod log;

pub use category::{handle_category_command, CategoryCommands};
pub use item::{handle_item_command, ItemCommands};
pub use log::handle_log_command;
