//! Display formatting for terminal output
//!
//! Pure functions from tracker state to text; the terminal view prints
//! whatever these return.

pub mod expense;
pub mod report;
pub mod summary;

pub use expense::{format_expense_form, format_expense_table};
pub use summary::{format_budget_form, format_remaining, format_screen_header, format_summary_card};

use crate::config::Settings;

/// Display preferences taken from settings
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
    /// Emit ANSI colors
    pub color: bool,
}

impl DisplayOptions {
    pub fn from_settings(settings: &Settings, color: bool) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
            color,
        }
    }

    /// Default formats without colors
    pub fn plain() -> Self {
        Self::from_settings(&Settings::default(), false)
    }
}
