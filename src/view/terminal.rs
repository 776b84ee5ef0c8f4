//! Line-oriented terminal view
//!
//! Prints snapshots and notifications to stdout/stderr and reads
//! confirmations from stdin.

use std::io::{self, BufRead, Write};

use crate::display::{
    format_expense_form, format_expense_table, format_screen_header, DisplayOptions,
};

use super::notification::{Notification, NotificationType};
use super::snapshot::Snapshot;
use super::View;

/// How much of each snapshot to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Summary card plus the expense table
    #[default]
    Full,
    /// Summary card only
    Summary,
    /// Print nothing on render; notifications still show
    Silent,
}

pub struct TerminalView {
    opts: DisplayOptions,
    render_mode: RenderMode,
    assume_yes: bool,
}

impl TerminalView {
    pub fn new(opts: DisplayOptions) -> Self {
        Self {
            opts,
            render_mode: RenderMode::default(),
            assume_yes: false,
        }
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    /// Answer yes to every confirmation without prompting
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn set_assume_yes(&mut self, yes: bool) {
        self.assume_yes = yes;
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.opts
    }
}

impl View for TerminalView {
    fn render(&mut self, snapshot: &Snapshot) {
        if self.render_mode == RenderMode::Silent {
            return;
        }

        print!("{}", format_screen_header(snapshot, &self.opts));
        if self.render_mode == RenderMode::Full && snapshot.shows_expense_list() {
            println!();
            print!(
                "{}",
                format_expense_table(&snapshot.expenses, snapshot.editing, &self.opts)
            );
        }
        if self.render_mode == RenderMode::Full && snapshot.is_editing() {
            println!();
            print!("{}", format_expense_form(&snapshot.expense_form));
        }
    }

    fn notify(&mut self, notification: &Notification) {
        let line = format!(
            "[{}] {}",
            notification.notification_type.icon(),
            notification.message
        );
        match notification.notification_type {
            NotificationType::Error | NotificationType::Warning => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(_) => false,
        }
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
