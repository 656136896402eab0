//! TUI views
//!
//! The listing and editor views, plus the header and status bar.

pub mod editor;
pub mod listing;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::route::Route;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    status_bar::render_header(frame, app, layout.header);

    match app.route {
        Route::Listing => listing::render(frame, app, layout.main),
        Route::Create | Route::Edit(_) => editor::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::ConfirmDelete(id) => {
            let title = app
                .store
                .items
                .get(id)
                .ok()
                .flatten()
                .map(|item| item.title)
                .unwrap_or_else(|| id.to_string());
            dialogs::confirm::render(frame, &format!("Delete '{}'?", title));
        }
        ActiveDialog::None => {}
    }
}
