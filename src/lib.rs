//! Pocketbook - terminal bookkeeping for income and outcome line items
//!
//! Items are filed under income or outcome categories. The data store lives
//! in memory for the lifetime of the process and is seeded at startup.
//!
//! # Architecture
//!
//! - `config`: paths and user settings
//! - `error`: crate-wide error type
//! - `models`: items, categories, money and ids
//! - `storage`: in-memory data store and seed loading
//! - `actions`: the only code that mutates the store, plus the background worker
//! - `audit`: JSONL audit log of item mutations
//! - `logging`: tracing setup
//! - `cli`, `display`: command-line interface
//! - `tui`: listing and create/edit views
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketbook::config::{PocketbookPaths, Settings};
//! use pocketbook::storage::{DataStore, SeedData};
//!
//! let paths = PocketbookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let (seed, _) = SeedData::resolve(None, &settings, &paths)?;
//! let store = DataStore::seeded(seed)?;
//! ```

pub mod actions;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;
pub mod tui;

pub use error::{PocketbookError, PocketbookResult};
