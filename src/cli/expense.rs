//! Expense CLI commands

use clap::Subcommand;

use crate::error::{TrackerError, TrackerResult};
use crate::models::ExpenseId;
use crate::storage::KeyValueStore;
use crate::view::{Notification, RenderMode, View};

use super::CliTracker;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        name: String,
        /// Amount spent (e.g. 12.50)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Change the name and amount of an expense
    Edit {
        /// Expense ID (e.g. exp-1718000000000)
        id: ExpenseId,
        /// New name
        name: String,
        /// New amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: ExpenseId,
    },
    /// List all expenses
    #[command(alias = "ls")]
    List,
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    tracker: &mut CliTracker<S>,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    tracker.view_mut().set_render_mode(RenderMode::Full);

    match cmd {
        ExpenseCommands::Add { name, amount } => {
            tracker.add_or_update_expense(&name, &amount)?;
        }

        ExpenseCommands::Edit { id, name, amount } => {
            // Keep the one-shot edit quiet until the update lands
            tracker.view_mut().set_render_mode(RenderMode::Silent);
            let found = tracker.edit_expense_request(id);
            tracker.view_mut().set_render_mode(RenderMode::Full);

            if !found {
                let err = TrackerError::expense_not_found(id.to_string());
                tracker.view_mut().notify(&Notification::from_error(&err));
                return Err(err);
            }
            tracker.add_or_update_expense(&name, &amount)?;
        }

        ExpenseCommands::Delete { id } => {
            if !tracker.delete_expense(id)? {
                tracker
                    .view_mut()
                    .notify(&Notification::info(format!("No expense with ID {}", id)));
            }
        }

        ExpenseCommands::List => tracker.render(),
    }

    Ok(())
}
