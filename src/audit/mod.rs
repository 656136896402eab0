//! Audit logging for Pocketbook
//!
//! Item create, update and delete actions are recorded with before/after
//! values in an append-only JSONL log.
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketbook::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Item,
//!     item.id.to_string(),
//!     Some(item.title.clone()),
//!     &item,
//! ))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
