//! Background action worker
//!
//! Requests run one at a time on a dedicated thread in submission order.
//! Each result is handed back as a [`Completion`] tagged with the session
//! that asked for it, so the UI can drop results for views it has left.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tracing::{debug, error};

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{CategoryId, Item, ItemDraft, ItemId};

use super::{Actions, EditData, InitialData};

/// Identifies the view instance that issued a request
pub type SessionId = u64;

/// Session used for requests that belong to the listing rather than an editor
pub const SHELL_SESSION: SessionId = 0;

/// A unit of work for the action set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    GetInitialData,
    GetEditData(ItemId),
    CreateItem { draft: ItemDraft, cid: CategoryId },
    UpdateItem { id: ItemId, draft: ItemDraft, cid: CategoryId },
    DeleteItem(ItemId),
}

/// Request discriminant, kept on the completion for error routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    GetInitialData,
    GetEditData,
    CreateItem,
    UpdateItem,
    DeleteItem,
}

impl RequestKind {
    /// Whether this request came from submitting the editor form
    pub fn is_submit(self) -> bool {
        matches!(self, Self::CreateItem | Self::UpdateItem)
    }
}

impl Request {
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::GetInitialData => RequestKind::GetInitialData,
            Self::GetEditData(_) => RequestKind::GetEditData,
            Self::CreateItem { .. } => RequestKind::CreateItem,
            Self::UpdateItem { .. } => RequestKind::UpdateItem,
            Self::DeleteItem(_) => RequestKind::DeleteItem,
        }
    }
}

/// Successful action output
#[derive(Debug)]
pub enum Response {
    InitialData(InitialData),
    EditData(EditData),
    Created(Item),
    Updated(Item),
    Deleted(Item),
}

/// The outcome of one request
#[derive(Debug)]
pub struct Completion {
    pub session: SessionId,
    pub kind: RequestKind,
    pub result: PocketbookResult<Response>,
}

struct Job {
    session: SessionId,
    request: Request,
}

/// Single-threaded FIFO executor for [`Request`]s
pub struct Worker {
    jobs: Option<mpsc::Sender<Job>>,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    /// Start the worker thread; `notify` receives every completion
    pub fn spawn<F>(actions: Actions, notify: F) -> PocketbookResult<Self>
    where
        F: Fn(Completion) + Send + 'static,
    {
        let (jobs, queue) = mpsc::channel::<Job>();

        let handle = thread::Builder::new()
            .name("pocketbook-actions".into())
            .spawn(move || {
                for job in queue {
                    let kind = job.request.kind();
                    debug!(session = job.session, ?kind, "running action");
                    let result = actions.perform(job.request);
                    if let Err(e) = &result {
                        error!(session = job.session, ?kind, error = %e, "action failed");
                    }
                    notify(Completion {
                        session: job.session,
                        kind,
                        result,
                    });
                }
            })
            .map_err(|e| PocketbookError::Action(format!("Failed to start worker: {}", e)))?;

        Ok(Self {
            jobs: Some(jobs),
            handle: Some(handle),
        })
    }

    /// Queue a request behind any already submitted
    pub fn submit(&self, session: SessionId, request: Request) -> PocketbookResult<()> {
        let jobs = self
            .jobs
            .as_ref()
            .ok_or_else(|| PocketbookError::Action("Worker is shut down".into()))?;
        jobs.send(Job { session, request })
            .map_err(|_| PocketbookError::Action("Worker thread has stopped".into()))
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop once the queue drains
        self.jobs.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
