//! Core data models for SpendWise
//!
//! The budget, the expenses recorded against it, and the summary derived
//! from both.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;
pub mod summary;

pub use budget::{Budget, BudgetValidationError, Period, PeriodParseError};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{ExpenseId, IdGenerator};
pub use money::{Money, MoneyParseError};
pub use summary::{Band, Summary};
