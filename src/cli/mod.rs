//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the tracker.

pub mod budget;
pub mod expense;
pub mod history;
pub mod shell;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use history::handle_history_command;
pub use shell::run_shell;

use crate::audit::AuditLogger;
use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;
use crate::services::Tracker;
use crate::storage::{open_store, BudgetRepository, KeyValueStore};
use crate::view::{Notification, RenderMode, TerminalView, View};

/// Tracker driven by the terminal view
pub type CliTracker<S> = Tracker<S, TerminalView>;

/// Open the store and load the tracker behind a silent terminal view
///
/// A store that cannot be opened is reported and replaced by memory, so
/// this never fails. Audit entries are only written for durable stores.
pub fn open_tracker(
    paths: &TrackerPaths,
    settings: &Settings,
    ephemeral: bool,
    mut view: TerminalView,
) -> CliTracker<Box<dyn KeyValueStore>> {
    let (store, problem) = open_store(paths, settings, ephemeral);
    if let Some(err) = problem {
        view.notify(&Notification::from_error(&err));
        view.notify(&Notification::warning(
            "Storage is unavailable; changes in this session will not be saved",
        ));
    }

    let durable = store.is_durable();
    view.set_render_mode(RenderMode::Silent);
    let tracker = Tracker::open(BudgetRepository::new(store), view, settings);

    if durable {
        tracker.with_audit(AuditLogger::new(paths.audit_log()))
    } else {
        tracker
    }
}

/// Handle the reset command
pub fn handle_reset_command<S: KeyValueStore>(
    tracker: &mut CliTracker<S>,
    yes: bool,
) -> TrackerResult<()> {
    tracker.view_mut().set_assume_yes(yes);
    tracker.view_mut().set_render_mode(RenderMode::Silent);

    if !tracker.reset_all()? {
        println!("Reset cancelled.");
    }
    Ok(())
}
