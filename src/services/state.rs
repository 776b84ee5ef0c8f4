//! In-memory tracker state
//!
//! One `TrackerState` is owned by each `Tracker`. Cloning it is how an
//! operation keeps the value it may need to restore.

use crate::models::{Budget, Expense, ExpenseId, Money, Period, Summary};
use crate::view::{BudgetForm, ExpenseForm, Screen, Snapshot};

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerState {
    /// Budget amount; `None` until first set and after a reset
    pub budget_amount: Option<Money>,
    pub period: Period,
    /// Insertion order is display order
    pub expenses: Vec<Expense>,
    /// Expense currently being edited
    pub editing: Option<ExpenseId>,
    pub screen: Screen,
    pub expense_form: ExpenseForm,
    pub budget_form: BudgetForm,
}

impl TrackerState {
    /// State of a tracker that has never been configured
    pub fn initial(default_period: Period) -> Self {
        Self {
            budget_amount: None,
            period: default_period,
            expenses: Vec::new(),
            editing: None,
            screen: Screen::Setup,
            expense_form: ExpenseForm::default(),
            budget_form: BudgetForm::blank(default_period),
        }
    }

    pub fn budget(&self) -> Option<Budget> {
        self.budget_amount.map(|amount| Budget {
            amount,
            period: self.period,
        })
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(self.budget().as_ref(), &self.expenses)
    }

    pub fn find_expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    /// Drop the edit cursor and return the form to insert mode
    pub fn clear_edit(&mut self) {
        self.editing = None;
        self.expense_form = ExpenseForm::default();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.screen,
            budget: self.budget(),
            period: self.period,
            expenses: self.expenses.clone(),
            summary: self.summary(),
            editing: self.editing,
            expense_form: self.expense_form.clone(),
            budget_form: self.budget_form.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Band;
    use crate::view::FormMode;
    use chrono::NaiveDate;

    fn with_expense(state: &mut TrackerState, id: i64, cents: i64) {
        state.expenses.push(
            Expense::new(
                ExpenseId::from_millis(id),
                format!("e{}", id),
                Money::from_cents(cents),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            )
            .unwrap(),
        );
    }

    #[test]
    fn test_initial_state() {
        let state = TrackerState::initial(Period::Weekly);
        assert!(state.budget().is_none());
        assert_eq!(state.period, Period::Weekly);
        assert_eq!(state.screen, Screen::Setup);
        assert_eq!(state.budget_form.period, Period::Weekly);

        let summary = state.summary();
        assert_eq!(summary.percentage, 0.0);
        assert_eq!(summary.band, Band::Critical);
    }

    #[test]
    fn test_lookup_and_clear_edit() {
        let mut state = TrackerState::initial(Period::Monthly);
        with_expense(&mut state, 1, 100);
        with_expense(&mut state, 2, 200);

        assert_eq!(state.position(ExpenseId::from_millis(2)), Some(1));
        assert!(state.find_expense(ExpenseId::from_millis(3)).is_none());

        state.editing = Some(ExpenseId::from_millis(1));
        state.expense_form.mode = FormMode::Update;
        state.clear_edit();
        assert!(state.editing.is_none());
        assert_eq!(state.expense_form, ExpenseForm::default());
    }

    #[test]
    fn test_snapshot_carries_summary() {
        let mut state = TrackerState::initial(Period::Monthly);
        state.budget_amount = Some(Money::from_cents(10000));
        state.screen = Screen::Configured;
        with_expense(&mut state, 1, 2500);

        let snapshot = state.snapshot();
        assert!(snapshot.is_configured());
        assert_eq!(snapshot.summary.remaining, Money::from_cents(7500));
        assert_eq!(snapshot.summary.band, Band::Nominal);
        assert!(snapshot.shows_expense_list());
    }
}
