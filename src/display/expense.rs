//! Expense list and form formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Expense, ExpenseId, Money};
use crate::view::ExpenseForm;

use super::report::truncate;
use super::DisplayOptions;

const NAME_WIDTH: usize = 32;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the expense list as a table; the row being edited is marked
pub fn format_expense_table(
    expenses: &[Expense],
    editing: Option<ExpenseId>,
    opts: &DisplayOptions,
) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().map(|expense| ExpenseRow {
        marker: if Some(expense.id) == editing { "*" } else { "" },
        id: expense.id.to_string(),
        date: expense.date.format(&opts.date_format).to_string(),
        name: truncate(&expense.name, NAME_WIDTH),
        amount: expense.amount.format_with_symbol(&opts.currency_symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\nTotal expenses: {}\n",
        table,
        total.format_with_symbol(&opts.currency_symbol)
    )
}

/// Describe the expense form (title, prefilled fields, available actions)
pub fn format_expense_form(form: &ExpenseForm) -> String {
    let mut output = format!("{}\n", form.mode.title());
    if !form.is_blank() {
        output.push_str(&format!("  Name:   {}\n", form.name));
        output.push_str(&format!("  Amount: {}\n", form.amount));
    }
    output.push_str(&format!("  [{}]", form.mode.action_label()));
    if form.mode.can_cancel() {
        output.push_str(" [Cancel]");
    }
    output.push('\n');
    output
}
