//! Configuration module for Pocketbook
//!
//! - Path resolution (env override or platform config dir)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PocketbookPaths;
pub use settings::Settings;
