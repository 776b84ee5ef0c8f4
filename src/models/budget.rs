//! Budget model
//!
//! A budget is a single spending ceiling paired with the period it recurs
//! over. It exists at most once per tracker.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Recurrence label attached to a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Weekly,
    Biweekly,
    #[default]
    Monthly,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Weekly, Period::Biweekly, Period::Monthly];

    /// Canonical storage label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        }
    }

    /// Capitalized label for headings
    pub fn title(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Biweekly => "Biweekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    /// Accepts the canonical labels plus the Spanish labels written by the
    /// legacy browser client.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" | "semanal" => Ok(Self::Weekly),
            "biweekly" | "bi-weekly" | "fortnightly" | "quincenal" => Ok(Self::Biweekly),
            "monthly" | "month" | "mensual" => Ok(Self::Monthly),
            _ => Err(PeriodParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(pub String);

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown period '{}' (expected weekly, biweekly or monthly)",
            self.0
        )
    }
}

impl std::error::Error for PeriodParseError {}

/// The user-defined spending ceiling for a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub amount: Money,
    pub period: Period,
}

impl Budget {
    /// Create a budget, rejecting non-positive amounts
    pub fn new(amount: Money, period: Period) -> Result<Self, BudgetValidationError> {
        let budget = Self { amount, period };
        budget.validate()?;
        Ok(budget)
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount(self.amount));
        }
        if !self.amount.is_within_limit() {
            return Err(BudgetValidationError::TooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} budget of {}", self.period.title(), self.amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount(Money),
    TooLarge(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Budget must be greater than 0 (got {})", amount)
            }
            Self::TooLarge(amount) => write!(
                f,
                "Budget {} exceeds the maximum of {}",
                amount,
                Money::MAX_AMOUNT
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
