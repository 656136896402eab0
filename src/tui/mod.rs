//! Terminal user interface
//!
//! A listing of all items plus the create/edit workflow, built on ratatui.
//! Actions run on a background worker; see [`crate::actions::Worker`].

pub mod app;
pub mod editor;
pub mod event;
pub mod handler;
pub mod layout;
pub mod route;
pub mod terminal;
pub mod views;
pub mod widgets;

// Dialogs
pub mod dialogs;

pub use app::App;
pub use route::Route;
pub use terminal::run_tui;
