//! Budget/expense tracker
//!
//! Every operation follows the same shape: validate the raw input, mutate
//! the in-memory state, persist through the repository, then hand the view
//! a fresh snapshot. When persisting fails the state is restored to what it
//! was before the operation, so memory and storage never disagree.

use chrono::Local;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{OverspendPolicy, Settings};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    Budget, BudgetValidationError, Expense, ExpenseId, IdGenerator, Money, MoneyParseError, Period,
    Summary,
};
use crate::storage::{BudgetRepository, KeyValueStore};
use crate::view::{BudgetForm, ExpenseForm, Notification, Screen, Snapshot, View};

use super::state::TrackerState;

const RESET_PROMPT: &str = "Reset everything? The budget and all expenses will be deleted.";

pub struct Tracker<S, V> {
    repository: BudgetRepository<S>,
    view: V,
    state: TrackerState,
    ids: IdGenerator,
    audit: Option<AuditLogger>,
    overspend_policy: OverspendPolicy,
    notification_secs: u64,
    default_period: Period,
}

impl<S: KeyValueStore, V: View> Tracker<S, V> {
    /// Load saved state and render the first screen
    ///
    /// Unreadable stored values are reported to the view and skipped; the
    /// tracker always starts.
    pub fn open(repository: BudgetRepository<S>, view: V, settings: &Settings) -> Self {
        let report = repository.load();

        let mut tracker = Self {
            repository,
            view,
            state: TrackerState::initial(settings.default_period),
            ids: IdGenerator::new(),
            audit: None,
            overspend_policy: settings.overspend_policy,
            notification_secs: settings.notification_secs,
            default_period: settings.default_period,
        };

        for problem in &report.problems {
            tracing::warn!(error = %problem, "ignoring unreadable stored value");
            tracker.notify(Notification::from_error(problem));
        }

        let saved = report.state;
        if saved.migrated {
            tracing::info!(
                count = saved.expenses.len(),
                "loaded expenses in legacy format; they will be rewritten on next save"
            );
        }

        let state = &mut tracker.state;
        if let Some(period) = saved.period {
            state.period = period;
        }
        state.budget_amount = saved.budget;
        state.expenses = saved.expenses;
        state.budget_form = BudgetForm::prefilled(state.budget_amount, state.period);
        if state.budget_amount.is_some() {
            state.screen = Screen::Configured;
        }
        tracker.ids = IdGenerator::seeded(tracker.state.expenses.iter().map(|e| &e.id));

        tracing::debug!(
            configured = tracker.state.budget_amount.is_some(),
            expenses = tracker.state.expenses.len(),
            durable = tracker.repository.store().is_durable(),
            "tracker opened"
        );

        tracker.render();
        tracker
    }

    /// Record successful mutations in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    // Budget

    /// Set the budget amount and period
    pub fn set_budget(&mut self, amount: &str, period: Period) -> TrackerResult<Budget> {
        let budget = match Money::parse(amount) {
            Ok(amount) => Budget::new(amount, period).map_err(|e| match e {
                BudgetValidationError::TooLarge(_) => e.to_string(),
                BudgetValidationError::NonPositiveAmount(_) => {
                    "Budget must be greater than 0".to_string()
                }
            }),
            Err(e @ MoneyParseError::TooLarge(_)) => Err(e.to_string()),
            Err(_) => Err("Budget must be greater than 0".to_string()),
        };
        let budget = match budget {
            Ok(budget) => budget,
            Err(message) => return Err(self.reject(TrackerError::Validation(message))),
        };

        let previous = self.state.clone();
        let before = previous.budget();

        self.state.budget_amount = Some(budget.amount);
        self.state.period = budget.period;
        self.state.screen = Screen::Configured;
        self.state.budget_form = BudgetForm::prefilled(Some(budget.amount), budget.period);

        if let Err(e) = self.repository.save_budget(&budget) {
            return Err(self.roll_back(previous, e));
        }

        tracing::debug!(amount = %budget.amount, period = %budget.period, "budget set");
        let name = Some(budget.period.title().to_string());
        self.audit(match before {
            Some(before) => AuditEntry::update(
                EntityType::Budget,
                "budget",
                name,
                &before,
                &budget,
                Some(format!("{} -> {}", before, budget)),
            ),
            None => AuditEntry::create(EntityType::Budget, "budget", name, &budget),
        });

        self.notify(Notification::success(format!(
            "{} budget set",
            budget.period.title()
        )));
        self.render();
        Ok(budget)
    }

    /// Reopen the budget form, prefilled with the current values
    pub fn edit_budget_request(&mut self) {
        self.state.budget_form =
            BudgetForm::prefilled(self.state.budget_amount, self.state.period);
        self.state.screen = Screen::EditingBudget;
        self.render();
    }

    /// Leave the budget form without saving
    pub fn cancel_budget_edit(&mut self) {
        self.state.screen = if self.state.budget_amount.is_some() {
            Screen::Configured
        } else {
            Screen::Setup
        };
        self.render();
    }

    // Expenses

    /// Insert a new expense, or update the one under the edit cursor
    pub fn add_or_update_expense(&mut self, name: &str, amount: &str) -> TrackerResult<ExpenseId> {
        let name = name.trim();
        let amount = amount.trim();
        if name.is_empty() || amount.is_empty() {
            return Err(self.reject(TrackerError::Validation("Fill in every field".into())));
        }

        let amount = match Money::parse(amount) {
            Ok(amount) if amount.is_positive() => amount,
            Err(e @ MoneyParseError::TooLarge(_)) => {
                return Err(self.reject(TrackerError::Validation(e.to_string())))
            }
            _ => {
                return Err(self.reject(TrackerError::Validation(
                    "Amount must be greater than 0".into(),
                )))
            }
        };

        match self.state.editing {
            Some(id) => self.update_expense(id, name, amount),
            None => self.insert_expense(name, amount),
        }
    }

    fn insert_expense(&mut self, name: &str, amount: Money) -> TrackerResult<ExpenseId> {
        let remaining = self.state.summary().remaining;
        // Only checked while there is headroom left
        if amount > remaining && remaining.is_positive() {
            let exceeded = TrackerError::BudgetExceeded {
                attempted: amount,
                remaining,
            };
            match self.overspend_policy {
                OverspendPolicy::Block => return Err(self.reject(exceeded)),
                OverspendPolicy::Warn => self.notify(Notification::from_error(&exceeded)),
            }
        }

        let expense = Expense::new(self.ids.next_id(), name, amount, Local::now().date_naive())
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        let id = expense.id;

        let previous = self.state.clone();
        self.state.expenses.push(expense.clone());
        self.state.expense_form = ExpenseForm::default();

        if let Err(e) = self.repository.save_expenses(&self.state.expenses) {
            return Err(self.roll_back(previous, e));
        }

        tracing::debug!(id = %id, amount = %amount, "expense added");
        self.audit(AuditEntry::create(
            EntityType::Expense,
            id.to_string(),
            Some(expense.name.clone()),
            &expense,
        ));

        self.notify(Notification::success("Expense added"));
        self.render();
        Ok(id)
    }

    fn update_expense(&mut self, id: ExpenseId, name: &str, amount: Money) -> TrackerResult<ExpenseId> {
        let Some(index) = self.state.position(id) else {
            self.state.clear_edit();
            return Err(self.reject(TrackerError::expense_not_found(id.to_string())));
        };

        let previous = self.state.clone();
        let before = self.state.expenses[index].clone();
        self.state.expenses[index]
            .revise(name, amount)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        let after = self.state.expenses[index].clone();
        self.state.clear_edit();

        if let Err(e) = self.repository.save_expenses(&self.state.expenses) {
            return Err(self.roll_back(previous, e));
        }

        tracing::debug!(id = %id, amount = %amount, "expense updated");
        self.audit(AuditEntry::update(
            EntityType::Expense,
            id.to_string(),
            Some(after.name.clone()),
            &before,
            &after,
            describe_changes(&before, &after),
        ));

        self.notify(Notification::success("Expense updated"));
        self.render();
        Ok(id)
    }

    /// Delete an expense; returns false when no expense has that id
    pub fn delete_expense(&mut self, id: ExpenseId) -> TrackerResult<bool> {
        let Some(index) = self.state.position(id) else {
            tracing::debug!(id = %id, "delete requested for unknown expense");
            self.render();
            return Ok(false);
        };

        let previous = self.state.clone();
        let removed = self.state.expenses.remove(index);
        if self.state.editing == Some(id) {
            self.state.clear_edit();
        }

        if let Err(e) = self.repository.save_expenses(&self.state.expenses) {
            return Err(self.roll_back(previous, e));
        }

        tracing::debug!(id = %id, "expense deleted");
        self.audit(AuditEntry::delete(
            EntityType::Expense,
            id.to_string(),
            Some(removed.name.clone()),
            &removed,
        ));

        self.notify(Notification::success("Expense deleted"));
        self.render();
        Ok(true)
    }

    /// Put an expense under the edit cursor and prefill the form
    pub fn edit_expense_request(&mut self, id: ExpenseId) -> bool {
        let Some(form) = self.state.find_expense(id).map(ExpenseForm::prefilled) else {
            tracing::debug!(id = %id, "edit requested for unknown expense");
            return false;
        };

        self.state.expense_form = form;
        self.state.editing = Some(id);
        self.render();
        true
    }

    /// Drop the edit cursor; safe to call repeatedly
    pub fn cancel_edit(&mut self) {
        self.state.clear_edit();
        self.render();
    }

    // Reset

    /// Wipe everything after the view confirms; returns false if declined
    pub fn reset_all(&mut self) -> TrackerResult<bool> {
        if !self.view.confirm(RESET_PROMPT) {
            tracing::debug!("reset declined");
            return Ok(false);
        }

        let previous = self.state.clone();
        self.state = TrackerState::initial(self.default_period);

        if let Err(e) = self.repository.clear() {
            return Err(self.roll_back(previous, e));
        }

        tracing::debug!(expenses = previous.expenses.len(), "tracker reset");
        let wiped = serde_json::json!({
            "budget": previous.budget_amount,
            "period": previous.period,
            "expenses": previous.expenses,
        });
        self.audit(AuditEntry::reset(
            &wiped,
            format!("{} expenses removed", previous.expenses.len()),
        ));

        self.notify(Notification::success("Everything has been reset"));
        self.render();
        Ok(true)
    }

    // Accessors

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn summary(&self) -> Summary {
        self.state.summary()
    }

    pub fn budget(&self) -> Option<Budget> {
        self.state.budget()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    pub fn find_expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.state.find_expense(id)
    }

    pub fn editing(&self) -> Option<ExpenseId> {
        self.state.editing
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn repository(&self) -> &BudgetRepository<S> {
        &self.repository
    }

    /// Redraw the current state
    pub fn render(&mut self) {
        let snapshot = self.state.snapshot();
        self.view.render(&snapshot);
    }

    fn notify(&mut self, notification: Notification) {
        let notification = notification.with_duration(self.notification_secs);
        self.view.notify(&notification);
    }

    /// Report a rejected operation; nothing was changed
    fn reject(&mut self, err: TrackerError) -> TrackerError {
        tracing::debug!(error = %err, "operation rejected");
        self.notify(Notification::from_error(&err));
        err
    }

    /// Restore the state from before a failed write
    fn roll_back(&mut self, previous: TrackerState, err: TrackerError) -> TrackerError {
        tracing::error!(error = %err, "failed to persist change, state restored");
        self.state = previous;
        self.notify(Notification::from_error(&err));
        self.render();
        err
    }

    fn audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                tracing::warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}

fn describe_changes(before: &Expense, after: &Expense) -> Option<String> {
    let mut changes = Vec::new();
    if before.name != after.name {
        changes.push(format!("name: {} -> {}", before.name, after.name));
    }
    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}
