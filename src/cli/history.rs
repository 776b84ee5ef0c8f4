//! Audit history command

use crate::audit::AuditLogger;
use crate::config::TrackerPaths;
use crate::error::TrackerResult;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(paths: &TrackerPaths, count: usize) -> TrackerResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    println!("\nShowing {} of the most recent entries", entries.len());

    Ok(())
}
