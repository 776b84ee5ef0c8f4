//! Typed repository over a key-value store
//!
//! Three keys hold the whole tracker: the budget amount as a decimal string,
//! the period label, and the expense list as a versioned JSON document.
//! Reading distinguishes an absent key (fresh start) from a value that is
//! present but unreadable (reported as `TrackerError::Corrupt`).

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, Expense, ExpenseId, Money, Period};

use super::kv::KeyValueStore;

pub const BUDGET_KEY: &str = "budget";
pub const PERIOD_KEY: &str = "period";
pub const EXPENSES_KEY: &str = "expenses";

/// Current schema version of the expense document
pub const EXPENSES_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct ExpenseDocument {
    version: u32,
    expenses: Vec<Expense>,
}

/// Entry as written by the legacy browser client (a bare JSON array)
#[derive(Debug, Deserialize)]
struct LegacyExpense {
    id: i64,
    name: String,
    amount: f64,
    date: String,
}

/// Whatever could be read back from storage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedState {
    pub budget: Option<Money>,
    pub period: Option<Period>,
    pub expenses: Vec<Expense>,
    /// The expense list was stored in the legacy format and was migrated
    pub migrated: bool,
}

/// Result of a startup load: the readable state plus one error per
/// field that was present but corrupt
#[derive(Debug, Default)]
pub struct LoadReport {
    pub state: SavedState,
    pub problems: Vec<TrackerError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

pub struct BudgetRepository<S> {
    store: S,
}

impl<S: KeyValueStore> BudgetRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Read all three fields, collecting corrupt ones instead of failing
    pub fn load(&self) -> LoadReport {
        let mut report = LoadReport::default();

        match self.load_budget_amount() {
            Ok(budget) => report.state.budget = budget,
            Err(e) => report.problems.push(e),
        }
        match self.load_period() {
            Ok(period) => report.state.period = period,
            Err(e) => report.problems.push(e),
        }
        match self.load_expenses() {
            Ok(Some((expenses, migrated))) => {
                report.state.expenses = expenses;
                report.state.migrated = migrated;
            }
            Ok(None) => {}
            Err(e) => report.problems.push(e),
        }

        report
    }

    pub fn load_budget_amount(&self) -> TrackerResult<Option<Money>> {
        let Some(raw) = self.store.get(BUDGET_KEY)? else {
            return Ok(None);
        };
        let amount =
            Money::parse(&raw).map_err(|e| TrackerError::corrupt(BUDGET_KEY, e.to_string()))?;
        if !amount.is_positive() {
            return Err(TrackerError::corrupt(
                BUDGET_KEY,
                format!("budget must be positive, found {}", raw),
            ));
        }
        Ok(Some(amount))
    }

    pub fn load_period(&self) -> TrackerResult<Option<Period>> {
        let Some(raw) = self.store.get(PERIOD_KEY)? else {
            return Ok(None);
        };
        raw.parse::<Period>()
            .map(Some)
            .map_err(|e| TrackerError::corrupt(PERIOD_KEY, e.to_string()))
    }

    /// Read the expense list; the flag reports a legacy-format migration
    pub fn load_expenses(&self) -> TrackerResult<Option<(Vec<Expense>, bool)>> {
        let Some(raw) = self.store.get(EXPENSES_KEY)? else {
            return Ok(None);
        };
        let corrupt = |reason: String| TrackerError::corrupt(EXPENSES_KEY, reason);

        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| corrupt(e.to_string()))?;

        let (expenses, migrated) = if value.is_array() {
            let legacy: Vec<LegacyExpense> =
                serde_json::from_value(value).map_err(|e| corrupt(e.to_string()))?;
            let expenses = legacy
                .into_iter()
                .map(migrate_legacy)
                .collect::<Result<Vec<_>, _>>()
                .map_err(corrupt)?;
            (expenses, true)
        } else {
            let document: ExpenseDocument =
                serde_json::from_value(value).map_err(|e| corrupt(e.to_string()))?;
            if document.version != EXPENSES_SCHEMA_VERSION {
                return Err(corrupt(format!(
                    "unsupported schema version {}",
                    document.version
                )));
            }
            (document.expenses, false)
        };

        let mut seen = HashSet::new();
        for expense in &expenses {
            expense
                .validate()
                .map_err(|e| corrupt(format!("{}: {}", expense.id, e)))?;
            if !seen.insert(expense.id) {
                return Err(corrupt(format!("duplicate id {}", expense.id)));
            }
        }

        Ok(Some((expenses, migrated)))
    }

    /// Persist amount and period in one write
    pub fn save_budget(&mut self, budget: &Budget) -> TrackerResult<()> {
        let amount = budget.amount.to_decimal_string();
        self.store.apply(&[
            (BUDGET_KEY, Some(amount.as_str())),
            (PERIOD_KEY, Some(budget.period.as_str())),
        ])
    }

    /// Persist the full expense list in the current schema
    pub fn save_expenses(&mut self, expenses: &[Expense]) -> TrackerResult<()> {
        let document = ExpenseDocument {
            version: EXPENSES_SCHEMA_VERSION,
            expenses: expenses.to_vec(),
        };
        let json = serde_json::to_string(&document)
            .map_err(|e| TrackerError::Persistence(format!("Failed to serialize expenses: {}", e)))?;
        self.store.set(EXPENSES_KEY, &json)
    }

    /// Remove all three keys in one write
    pub fn clear(&mut self) -> TrackerResult<()> {
        self.store
            .apply(&[(BUDGET_KEY, None), (PERIOD_KEY, None), (EXPENSES_KEY, None)])
    }
}

fn migrate_legacy(legacy: LegacyExpense) -> Result<Expense, String> {
    let amount = Money::from_f64(legacy.amount)
        .ok_or_else(|| format!("invalid amount {} for '{}'", legacy.amount, legacy.name))?;
    let date = parse_legacy_date(&legacy.date)
        .ok_or_else(|| format!("unrecognized date '{}' for '{}'", legacy.date, legacy.name))?;
    Expense::new(ExpenseId::from_millis(legacy.id), &legacy.name, amount, date)
        .map_err(|e| format!("exp-{}: {}", legacy.id, e))
}

fn parse_legacy_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}
