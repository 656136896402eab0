//! Application state for the TUI
//!
//! The App struct holds the current route, the editor session (if any) and
//! listing state. Actions are never run here: requests are queued with
//! [`App::queue`] and drained by the event loop, and their results come back
//! through [`App::handle_completion`].

use tracing::{debug, info, warn};

use crate::actions::{Completion, Request, Response, SessionId, SHELL_SESSION};
use crate::config::Settings;
use crate::models::{Category, Item, ItemId};
use crate::storage::DataStore;

use super::editor::{ItemEditor, SubmitError};
use super::route::Route;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmDelete(ItemId),
}

/// Main application state
pub struct App<'a> {
    /// Read access for rendering
    pub store: &'a DataStore,

    pub settings: &'a Settings,

    pub should_quit: bool,

    pub route: Route,

    /// Draft state while on the create or edit route
    pub editor: Option<ItemEditor>,

    pub active_dialog: ActiveDialog,

    /// Selected row in the listing
    pub selected_index: usize,

    pub status_message: Option<String>,

    last_session: SessionId,

    outbox: Vec<(SessionId, Request)>,
}

impl<'a> App<'a> {
    pub fn new(store: &'a DataStore, settings: &'a Settings) -> Self {
        Self {
            store,
            settings,
            should_quit: false,
            route: Route::Listing,
            editor: None,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            status_message: None,
            last_session: SHELL_SESSION,
            outbox: Vec::new(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Session of the mounted editor, if any
    pub fn active_session(&self) -> Option<SessionId> {
        self.editor.as_ref().map(ItemEditor::session)
    }

    /// Queue a request for the action worker
    pub fn queue(&mut self, session: SessionId, request: Request) {
        self.outbox.push((session, request));
    }

    /// Requests queued since the last call, oldest first
    pub fn take_requests(&mut self) -> Vec<(SessionId, Request)> {
        std::mem::take(&mut self.outbox)
    }

    /// Switch routes; leaving an editor discards its draft
    pub fn navigate(&mut self, route: Route) {
        info!(from = %self.route, to = %route, "navigate");
        self.editor = None;
        self.close_dialog();

        match route {
            Route::Listing => {}
            Route::Create => {
                let session = self.next_session();
                self.mount(ItemEditor::create(session, self.categories()));
            }
            Route::Edit(id) => {
                let session = self.next_session();
                let item = match self.store.items.get(id) {
                    Ok(item) => item,
                    Err(e) => {
                        warn!(error = %e, "failed to read item for editor");
                        None
                    }
                };
                self.mount(ItemEditor::edit(session, id, item, self.categories()));
            }
        }

        self.route = route;
    }

    fn next_session(&mut self) -> SessionId {
        self.last_session += 1;
        self.last_session
    }

    fn mount(&mut self, editor: ItemEditor) {
        let session = editor.session();
        for request in editor.mount_requests() {
            self.queue(session, request);
        }
        self.editor = Some(editor);
    }

    /// Submit the editor form
    pub fn submit_editor(&mut self) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        let session = editor.session();
        match editor.submit() {
            Ok(request) => self.queue(session, request),
            Err(SubmitError::InFlight) => {}
            Err(e) => debug!(session, error = %e, "submit rejected"),
        }
    }

    /// Leave the editor without saving
    pub fn cancel_editor(&mut self) {
        self.navigate(Route::Listing);
    }

    /// Apply an action result if the session that asked for it is current
    pub fn handle_completion(&mut self, completion: Completion) {
        let Completion {
            session,
            kind,
            result,
        } = completion;

        if session != SHELL_SESSION && self.active_session() != Some(session) {
            debug!(session, ?kind, "dropping stale completion");
            return;
        }

        match result {
            Ok(Response::InitialData(data)) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.apply_initial_data(data);
                }
            }
            Ok(Response::EditData(data)) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.apply_edit_data(data);
                }
            }
            Ok(Response::Created(item)) | Ok(Response::Updated(item)) => {
                self.navigate(Route::Listing);
                self.select_item(item.id);
                self.set_status(format!("Saved '{}'", item.title));
            }
            Ok(Response::Deleted(item)) => {
                self.clamp_selection();
                self.set_status(format!("Deleted '{}'", item.title));
            }
            Err(e) => {
                if kind.is_submit() {
                    if let Some(editor) = self.editor.as_mut() {
                        editor.submit_failed(e.to_string());
                    }
                }
                self.set_status(format!("Error: {}", e));
            }
        }
    }

    /// All items, newest first
    pub fn items(&self) -> Vec<Item> {
        self.store.items.get_all().unwrap_or_default()
    }

    /// All categories in display order
    pub fn categories(&self) -> Vec<Category> {
        self.store.categories.get_all().unwrap_or_default()
    }

    /// The item under the listing cursor
    pub fn selected_item(&self) -> Option<Item> {
        self.items().into_iter().nth(self.selected_index)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, max: usize) {
        if self.selected_index < max.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Ask for confirmation before deleting the selected item
    pub fn request_delete(&mut self) {
        if let Some(item) = self.selected_item() {
            self.open_dialog(ActiveDialog::ConfirmDelete(item.id));
        }
    }

    pub fn confirm_delete(&mut self) {
        if let ActiveDialog::ConfirmDelete(id) = self.active_dialog {
            self.queue(SHELL_SESSION, Request::DeleteItem(id));
        }
        self.close_dialog();
    }

    fn select_item(&mut self, id: ItemId) {
        if let Some(index) = self.items().iter().position(|i| i.id == id) {
            self.selected_index = index;
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.store.items.count().unwrap_or(0);
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
    }
}
