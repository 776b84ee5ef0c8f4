//! Budget CLI commands

use clap::Subcommand;

use crate::error::TrackerResult;
use crate::models::Period;
use crate::storage::KeyValueStore;
use crate::view::RenderMode;

use super::CliTracker;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget amount and period
    Set {
        /// Budget amount (e.g. 1000 or 1000.50)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Budget period: weekly, biweekly or monthly
        #[arg(short, long)]
        period: Option<Period>,
    },
    /// Show the budget summary
    Show,
    /// Show the budget form prefilled with the current values
    Edit,
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    tracker: &mut CliTracker<S>,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    tracker.view_mut().set_render_mode(RenderMode::Summary);

    match cmd {
        BudgetCommands::Set { amount, period } => {
            let period = period.unwrap_or(tracker.state().period);
            tracker.set_budget(&amount, period)?;
        }

        BudgetCommands::Show => tracker.render(),

        BudgetCommands::Edit => tracker.edit_budget_request(),
    }

    Ok(())
}
