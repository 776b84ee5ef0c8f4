//! Budget summary card

use crate::view::{BudgetForm, Screen, Snapshot};

use super::report::{colorize, format_bar, format_percentage};
use super::DisplayOptions;

const BAR_WIDTH: usize = 30;

/// Remaining indicator: "Remaining: $995.00" or "Over budget by: $20.00"
pub fn format_remaining(snapshot: &Snapshot, opts: &DisplayOptions) -> String {
    let remaining = snapshot.summary.remaining;
    if remaining.is_negative() {
        format!(
            "Over budget by: {}",
            remaining.abs().format_with_symbol(&opts.currency_symbol)
        )
    } else {
        format!(
            "Remaining: {}",
            remaining.format_with_symbol(&opts.currency_symbol)
        )
    }
}

/// Render the summary card for a configured tracker
pub fn format_summary_card(snapshot: &Snapshot, opts: &DisplayOptions) -> String {
    let summary = &snapshot.summary;
    let band = summary.band;
    let mut output = String::new();

    output.push_str(&format!(
        "{} budget: {}\n",
        snapshot.period.title(),
        summary.budget.format_with_symbol(&opts.currency_symbol)
    ));
    output.push_str(&format!(
        "{} [{}]\n",
        colorize(&format_remaining(snapshot, opts), band, opts.color),
        band
    ));
    output.push_str(&format!(
        "{} {} available\n",
        colorize(&format_bar(summary.progress(), BAR_WIDTH), band, opts.color),
        format_percentage(summary.percentage)
    ));

    output
}

/// Render the budget configuration form
pub fn format_budget_form(form: &BudgetForm) -> String {
    let amount = if form.amount.is_empty() {
        "(not set)"
    } else {
        form.amount.as_str()
    };
    format!(
        "Configure budget\n  Amount: {}\n  Period: {}\n",
        amount, form.period
    )
}

/// Whole-screen text for the current snapshot, without the expense list
pub fn format_screen_header(snapshot: &Snapshot, opts: &DisplayOptions) -> String {
    match snapshot.screen {
        Screen::Setup => {
            let mut output = String::from("No budget configured yet.\n");
            output.push_str(&format_budget_form(&snapshot.budget_form));
            output
        }
        Screen::EditingBudget => format_budget_form(&snapshot.budget_form),
        Screen::Configured => format_summary_card(snapshot, opts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Expense, ExpenseId, Money, Period, Summary};
    use crate::view::ExpenseForm;
    use chrono::NaiveDate;

    fn snapshot(budget_cents: i64, spent_cents: i64) -> Snapshot {
        let budget = Budget::new(Money::from_cents(budget_cents), Period::Monthly).unwrap();
        let expenses = vec![Expense::new(
            ExpenseId::from_millis(1),
            "Spent",
            Money::from_cents(spent_cents),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
        .unwrap()];
        let summary = Summary::compute(Some(&budget), &expenses);

        Snapshot {
            screen: Screen::Configured,
            budget: Some(budget),
            period: Period::Monthly,
            expenses,
            summary,
            editing: None,
            expense_form: ExpenseForm::default(),
            budget_form: BudgetForm::blank(Period::Monthly),
        }
    }

    #[test]
    fn test_summary_card_plain() {
        let card = format_summary_card(&snapshot(100000, 500), &DisplayOptions::plain());
        assert!(card.contains("Monthly budget: $1000.00"));
        assert!(card.contains("Remaining: $995.00 [nominal]"));
        assert!(card.contains("99.5% available"));
    }

    #[test]
    fn test_overspent_card() {
        let card = format_summary_card(&snapshot(10000, 12000), &DisplayOptions::plain());
        assert!(card.contains("Over budget by: $20.00 [critical]"));
        assert!(card.contains("-20.0% available"));
    }

    #[test]
    fn test_setup_screen_shows_form() {
        let mut snap = snapshot(10000, 100);
        snap.screen = Screen::Setup;
        let text = format_screen_header(&snap, &DisplayOptions::plain());
        assert!(text.contains("No budget configured yet."));
        assert!(text.contains("Amount: (not set)"));
        assert!(text.contains("Period: monthly"));
    }
}
