//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or the current route, and
//! action completions to the app.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::event::Event;
use super::route::Route;
use super::views;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Completed(completion) => {
            app.handle_completion(completion);
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) | Event::Tick => Ok(()),
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    match app.route {
        Route::Listing => handle_listing_key(app, key),
        Route::Create | Route::Edit(_) => views::editor::handle_key(app, key),
    }
    Ok(())
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.close_dialog();
            }
        }
        ActiveDialog::ConfirmDelete(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::None => {}
    }
}

fn handle_listing_key(app: &mut App, key: KeyEvent) {
    app.clear_status();
    let count = app.store.items.count().unwrap_or(0);

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(count),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => app.selected_index = count.saturating_sub(1),

        KeyCode::Char('a') | KeyCode::Char('n') => app.navigate(Route::Create),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(item) = app.selected_item() {
                app.navigate(Route::Edit(item.id));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::storage::{DataStore, SeedData};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_listing_keys_navigate() {
        let store = DataStore::seeded(SeedData::demo()).unwrap();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        handle_event(&mut app, key(KeyCode::Char('j'))).unwrap();
        assert_eq!(app.selected_index, 1);

        handle_event(&mut app, key(KeyCode::Char('e'))).unwrap();
        assert!(matches!(app.route, Route::Edit(_)));

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.route, Route::Listing);

        handle_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.route, Route::Create);
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let store = DataStore::seeded(SeedData::demo()).unwrap();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        handle_event(&mut app, key(KeyCode::Char('d'))).unwrap();
        assert!(matches!(app.active_dialog, ActiveDialog::ConfirmDelete(_)));
        handle_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert!(!app.has_dialog());
        assert!(app.take_requests().is_empty());

        handle_event(&mut app, key(KeyCode::Char('d'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert_eq!(app.take_requests().len(), 1);
    }

    #[test]
    fn test_help_toggles() {
        let store = DataStore::new();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        handle_event(&mut app, key(KeyCode::Char('?'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }
}
