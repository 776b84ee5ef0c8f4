//! Interactive shell
//!
//! One tracker lives for the whole session, so the edit cursor carries over
//! from `edit <id>` to the next `add`.

use std::io::{self, Write};

use clap::{Parser, Subcommand};

use crate::error::TrackerResult;
use crate::models::{ExpenseId, Period};
use crate::services::Tracker;
use crate::storage::KeyValueStore;
use crate::view::{Notification, RenderMode, Screen, View};

use super::CliTracker;

const PROMPT: &str = "spendwise> ";

#[derive(Parser, Debug)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
enum ShellCommand {
    /// Set the budget amount and period
    Budget {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(short, long)]
        period: Option<Period>,
    },
    /// Reopen the budget form
    EditBudget,
    /// Add an expense, or save the one being edited
    #[command(alias = "update")]
    Add {
        name: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Start editing an expense
    Edit { id: ExpenseId },
    /// Leave the expense or budget form without saving
    Cancel,
    /// Delete an expense
    #[command(alias = "rm")]
    Delete { id: ExpenseId },
    /// Show the summary and the expense list
    #[command(alias = "ls")]
    List,
    /// Delete the budget and every expense
    Reset,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

/// Run the read-eval loop on stdin until `quit` or end of input
pub fn run_shell<S: KeyValueStore>(tracker: &mut CliTracker<S>) -> TrackerResult<()> {
    tracker.view_mut().set_render_mode(RenderMode::Full);
    tracker.render();
    println!("Type 'help' for commands, 'quit' to leave.");

    let stdin = io::stdin();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        if execute_line(tracker, &line) == LineOutcome::Quit {
            break;
        }
    }

    Ok(())
}

/// Parse and run one shell line
///
/// Operation failures have already been shown through the view, so they
/// never end the session.
pub fn execute_line<S: KeyValueStore, V: View>(
    tracker: &mut Tracker<S, V>,
    line: &str,
) -> LineOutcome {
    let words = match split_words(line) {
        Ok(words) if words.is_empty() => return LineOutcome::Continue,
        Ok(words) => words,
        Err(message) => {
            tracker.view_mut().notify(&Notification::error(message));
            return LineOutcome::Continue;
        }
    };

    let command = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            // Help output and usage errors are printed by clap itself
            let _ = e.print();
            return LineOutcome::Continue;
        }
    };

    tracing::debug!(?command, "shell command");
    let result = match command {
        ShellCommand::Budget { amount, period } => {
            let period = period.unwrap_or(tracker.state().period);
            tracker.set_budget(&amount, period).map(|_| ())
        }
        ShellCommand::EditBudget => {
            tracker.edit_budget_request();
            Ok(())
        }
        ShellCommand::Add { name, amount } => {
            tracker.add_or_update_expense(&name, &amount).map(|_| ())
        }
        ShellCommand::Edit { id } => {
            if !tracker.edit_expense_request(id) {
                tracker
                    .view_mut()
                    .notify(&Notification::error(format!("No expense with ID {}", id)));
            }
            Ok(())
        }
        ShellCommand::Cancel => {
            if tracker.state().screen == Screen::EditingBudget {
                tracker.cancel_budget_edit();
            } else {
                tracker.cancel_edit();
            }
            Ok(())
        }
        ShellCommand::Delete { id } => tracker.delete_expense(id).map(|_| ()),
        ShellCommand::List => {
            tracker.render();
            Ok(())
        }
        ShellCommand::Reset => tracker.reset_all().map(|_| ()),
        ShellCommand::Quit => return LineOutcome::Quit,
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "shell command failed");
    }
    LineOutcome::Continue
}

/// Split a line into words, honoring single and double quotes
fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unterminated {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Money;
    use crate::storage::{BudgetRepository, MemoryStore};
    use crate::view::RecordingView;

    fn tracker() -> Tracker<MemoryStore, RecordingView> {
        Tracker::open(
            BudgetRepository::new(MemoryStore::new()),
            RecordingView::new(),
            &Settings::default(),
        )
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("add Coffee 5").unwrap(), vec!["add", "Coffee", "5"]);
        assert_eq!(
            split_words("add \"Iced coffee\" 6.50").unwrap(),
            vec!["add", "Iced coffee", "6.50"]
        );
        assert_eq!(split_words("add 'It''s' 1").unwrap(), vec!["add", "Its", "1"]);
        assert_eq!(split_words("add \"\" 1").unwrap(), vec!["add", "", "1"]);
        assert!(split_words("   ").unwrap().is_empty());
        assert!(split_words("add \"open 1").is_err());
    }

    #[test]
    fn test_parse_shell_commands() {
        let parsed = ShellLine::try_parse_from(["budget", "500", "--period", "weekly"]).unwrap();
        assert_eq!(
            parsed.command,
            ShellCommand::Budget {
                amount: "500".into(),
                period: Some(Period::Weekly),
            }
        );

        let parsed = ShellLine::try_parse_from(["edit", "exp-42"]).unwrap();
        assert_eq!(
            parsed.command,
            ShellCommand::Edit {
                id: ExpenseId::from_millis(42)
            }
        );

        let parsed = ShellLine::try_parse_from(["exit"]).unwrap();
        assert_eq!(parsed.command, ShellCommand::Quit);
        assert!(ShellLine::try_parse_from(["frobnicate"]).is_err());
    }

    #[test]
    fn test_session_keeps_edit_cursor() {
        let mut tracker = tracker();
        assert_eq!(execute_line(&mut tracker, "budget 100"), LineOutcome::Continue);
        execute_line(&mut tracker, "add Coffee 5");
        let id = tracker.expenses()[0].id;

        execute_line(&mut tracker, &format!("edit {}", id));
        assert_eq!(tracker.editing(), Some(id));

        execute_line(&mut tracker, "add 'Iced coffee' 6");
        assert_eq!(tracker.expenses().len(), 1);
        assert_eq!(tracker.expenses()[0].name, "Iced coffee");
        assert_eq!(tracker.expenses()[0].amount, Money::from_cents(600));
        assert!(tracker.editing().is_none());
    }

    #[test]
    fn test_failures_do_not_end_session() {
        let mut tracker = tracker();
        assert_eq!(execute_line(&mut tracker, "budget 0"), LineOutcome::Continue);
        assert_eq!(execute_line(&mut tracker, "edit 99"), LineOutcome::Continue);
        assert_eq!(execute_line(&mut tracker, "add \"broken"), LineOutcome::Continue);
        assert!(tracker.view().last_notification().unwrap().is_error());
        assert_eq!(execute_line(&mut tracker, "quit"), LineOutcome::Quit);
    }

    #[test]
    fn test_reset_and_cancel() {
        let mut tracker = tracker();
        execute_line(&mut tracker, "budget 100 -p biweekly");
        execute_line(&mut tracker, "add Rent 50");
        execute_line(&mut tracker, "edit-budget");
        execute_line(&mut tracker, "cancel");
        assert_eq!(tracker.state().screen, Screen::Configured);
        execute_line(&mut tracker, "reset");

        assert!(tracker.budget().is_none());
        assert!(tracker.expenses().is_empty());
        assert_eq!(tracker.view().prompts.len(), 1);
    }
}
