//! Render contract between the tracker and its view
//!
//! After every operation the tracker hands the view a `Snapshot`; the view
//! reads whatever fields it needs and never reaches back into the tracker.

use crate::models::{Budget, Expense, ExpenseId, Money, Period, Summary};

/// Which screen the view should be showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// No budget yet: only the budget form is shown
    #[default]
    Setup,
    /// Budget summary, expense form and expense list
    Configured,
    /// Budget form re-opened over a configured tracker
    EditingBudget,
}

/// Whether the expense form inserts or updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Update,
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Add => "Add expense",
            Self::Update => "Edit expense",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Update => "Update",
        }
    }

    /// The update form also offers a cancel action
    pub fn can_cancel(&self) -> bool {
        matches!(self, Self::Update)
    }
}

/// Contents of the expense input form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: String,
    pub mode: FormMode,
}

impl ExpenseForm {
    pub fn prefilled(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            amount: expense.amount.to_decimal_string(),
            mode: FormMode::Update,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.amount.is_empty()
    }
}

/// Contents of the budget configuration form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BudgetForm {
    pub amount: String,
    pub period: Period,
}

impl BudgetForm {
    pub fn blank(period: Period) -> Self {
        Self {
            amount: String::new(),
            period,
        }
    }

    pub fn prefilled(amount: Option<Money>, period: Period) -> Self {
        Self {
            amount: amount.map(|a| a.to_decimal_string()).unwrap_or_default(),
            period,
        }
    }
}

/// Everything a view needs to draw the tracker
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub screen: Screen,
    pub budget: Option<Budget>,
    pub period: Period,
    pub expenses: Vec<Expense>,
    pub summary: Summary,
    pub editing: Option<ExpenseId>,
    pub expense_form: ExpenseForm,
    pub budget_form: BudgetForm,
}

impl Snapshot {
    pub fn is_configured(&self) -> bool {
        self.budget.is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// The expense list card is hidden while the list is empty
    pub fn shows_expense_list(&self) -> bool {
        !self.expenses.is_empty() && self.screen != Screen::Setup
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_form_mode_labels() {
        assert_eq!(FormMode::Add.title(), "Add expense");
        assert_eq!(FormMode::Update.action_label(), "Update");
        assert!(FormMode::Update.can_cancel());
        assert!(!FormMode::Add.can_cancel());
    }

    #[test]
    fn test_prefilled_expense_form() {
        let expense = Expense::new(
            ExpenseId::from_millis(1),
            "Lunch",
            Money::from_cents(1250),
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        )
        .unwrap();

        let form = ExpenseForm::prefilled(&expense);
        assert_eq!(form.name, "Lunch");
        assert_eq!(form.amount, "12.50");
        assert_eq!(form.mode, FormMode::Update);
        assert!(!form.is_blank());
        assert!(ExpenseForm::default().is_blank());
    }

    #[test]
    fn test_budget_form_prefill() {
        let form = BudgetForm::prefilled(Some(Money::from_cents(100000)), Period::Weekly);
        assert_eq!(form.amount, "1000.00");
        assert_eq!(form.period, Period::Weekly);

        let blank = BudgetForm::prefilled(None, Period::Monthly);
        assert_eq!(blank, BudgetForm::blank(Period::Monthly));
    }
}
