//! Derived budget state
//!
//! Everything the summary card shows is computed here from the budget and
//! the expense list: totals, remaining headroom, the remaining percentage
//! and the urgency band.

use serde::Serialize;
use std::fmt;

use super::budget::Budget;
use super::expense::Expense;
use super::money::Money;

/// Urgency band derived from the remaining percentage
///
/// Both the remaining-amount indicator and the summary card take their
/// styling from this one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// More than half of the budget is left
    Nominal,
    /// Between 20% (exclusive) and 50% (inclusive) is left
    Caution,
    /// 20% or less is left, including overspend
    Critical,
}

impl Band {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 50.0 {
            Self::Nominal
        } else if percentage > 20.0 {
            Self::Caution
        } else {
            Self::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nominal => "nominal",
            Self::Caution => "caution",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Budget amount (zero while no budget is set)
    pub budget: Money,
    pub total: Money,
    /// Budget minus total; negative when overspent
    pub remaining: Money,
    /// Remaining as a percentage of the budget, unclamped
    pub percentage: f64,
    pub band: Band,
}

impl Summary {
    pub fn compute(budget: Option<&Budget>, expenses: &[Expense]) -> Self {
        let budget_amount = budget.map(|b| b.amount).unwrap_or_default();
        let total: Money = expenses.iter().map(|e| e.amount).sum();
        let remaining = budget_amount - total;

        let percentage = if budget_amount.is_positive() {
            // Multiply before dividing so whole-cent ratios stay exact
            (remaining.cents() as f64 * 100.0) / budget_amount.cents() as f64
        } else {
            0.0
        };

        Self {
            budget: budget_amount,
            total,
            remaining,
            percentage,
            band: Band::from_percentage(percentage),
        }
    }

    /// Fill level for a progress bar, clamped to [0, 100]
    pub fn progress(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}
