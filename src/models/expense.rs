//! Expense model
//!
//! A single recorded spend entry against the budget. The id and the creation
//! date never change after creation; name and amount can be edited in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// Display name, stored trimmed
    pub name: String,

    pub amount: Money,

    /// Day the expense was recorded
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense
    ///
    /// The name is trimmed; an empty name or non-positive amount is rejected.
    pub fn new(
        id: ExpenseId,
        name: impl AsRef<str>,
        amount: Money,
        date: NaiveDate,
    ) -> Result<Self, ExpenseValidationError> {
        let expense = Self {
            id,
            name: name.as_ref().trim().to_string(),
            amount,
            date,
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Replace name and amount, keeping identity and date
    pub fn revise(
        &mut self,
        name: impl AsRef<str>,
        amount: Money,
    ) -> Result<(), ExpenseValidationError> {
        let mut revised = self.clone();
        revised.name = name.as_ref().trim().to_string();
        revised.amount = amount;
        revised.validate()?;
        *self = revised;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if !self.amount.is_within_limit() {
            return Err(ExpenseValidationError::TooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.amount
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NonPositiveAmount(Money),
    TooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than 0 (got {})", amount)
            }
            Self::TooLarge(amount) => write!(
                f,
                "Amount {} exceeds the maximum of {}",
                amount,
                Money::MAX_AMOUNT
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_new_trims_name() {
        let expense =
            Expense::new(ExpenseId::from_millis(1), "  Coffee ", Money::from_cents(500), day())
                .unwrap();
        assert_eq!(expense.name, "Coffee");
        assert_eq!(expense.amount.cents(), 500);
    }

    #[test]
    fn test_new_rejects_blank_name() {
        let err = Expense::new(ExpenseId::from_millis(1), "   ", Money::from_cents(500), day())
            .unwrap_err();
        assert_eq!(err, ExpenseValidationError::EmptyName);
    }

    #[test]
    fn test_new_rejects_non_positive_amount() {
        assert!(Expense::new(ExpenseId::from_millis(1), "Tea", Money::zero(), day()).is_err());
        assert!(
            Expense::new(ExpenseId::from_millis(1), "Tea", Money::from_cents(-1), day()).is_err()
        );
    }

    #[test]
    fn test_new_rejects_amount_over_limit() {
        let err = Expense::new(
            ExpenseId::from_millis(1),
            "Yacht",
            Money::from_cents(9_000_000_000_000_000_000),
            day(),
        )
        .unwrap_err();
        assert!(matches!(err, ExpenseValidationError::TooLarge(_)));
        assert!(
            Expense::new(ExpenseId::from_millis(1), "Yacht", Money::MAX_AMOUNT, day()).is_ok()
        );
    }

    #[test]
    fn test_revise_keeps_identity_and_date() {
        let mut expense =
            Expense::new(ExpenseId::from_millis(7), "A", Money::from_cents(1000), day()).unwrap();
        expense.revise(" A2 ", Money::from_cents(2000)).unwrap();

        assert_eq!(expense.id, ExpenseId::from_millis(7));
        assert_eq!(expense.date, day());
        assert_eq!(expense.name, "A2");
        assert_eq!(expense.amount.cents(), 2000);
    }

    #[test]
    fn test_failed_revise_leaves_expense_untouched() {
        let mut expense =
            Expense::new(ExpenseId::from_millis(7), "A", Money::from_cents(1000), day()).unwrap();
        assert!(expense.revise("", Money::from_cents(2000)).is_err());
        assert_eq!(expense.name, "A");
        assert_eq!(expense.amount.cents(), 1000);
    }

    #[test]
    fn test_serialization_shape() {
        let expense =
            Expense::new(ExpenseId::from_millis(9), "Rent", Money::from_cents(8500), day())
                .unwrap();
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 9, "name": "Rent", "amount": 8500, "date": "2025-03-14"})
        );
    }
}
