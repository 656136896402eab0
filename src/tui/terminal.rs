//! Terminal setup and teardown
//!
//! Handles raw mode and the alternate screen, including a panic hook that
//! restores the terminal on crash, and runs the main event loop.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use tracing::info;

use crate::actions::{Actions, Worker};
use crate::audit::AuditLogger;
use crate::config::{PocketbookPaths, Settings};
use crate::storage::DataStore;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;
use super::route::Route;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI starting at `route`
pub fn run_tui(
    store: Arc<DataStore>,
    settings: &Settings,
    paths: &PocketbookPaths,
    route: Route,
) -> Result<()> {
    let mut actions = Actions::new(store.clone());
    if settings.audit_enabled {
        actions = actions.with_audit(AuditLogger::new(paths.audit_log()));
    }

    let events = EventHandler::default();
    let completions = events.sender();
    let worker = Worker::spawn(actions, move |completion| {
        let _ = completions.send(Event::Completed(completion));
    })?;

    let mut app = App::new(&store, settings);
    app.navigate(route);
    info!(%route, "starting TUI");

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &events, &worker);
    restore_terminal()?;

    info!("TUI closed");
    result
}

fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    events: &EventHandler,
    worker: &Worker,
) -> Result<()> {
    loop {
        for (session, request) in app.take_requests() {
            worker.submit(session, request)?;
        }

        terminal.draw(|frame| super::views::render(frame, app))?;

        let event = events.next()?;
        handle_event(app, event)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
