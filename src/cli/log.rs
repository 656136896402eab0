//! Audit log CLI command

use crate::audit::AuditLogger;
use crate::config::PocketbookPaths;
use crate::error::PocketbookResult;

/// Print the most recent audit entries, oldest first
pub fn handle_log_command(paths: &PocketbookPaths, limit: usize) -> PocketbookResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries in {}", logger.path().display());
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
