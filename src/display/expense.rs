//! Expense display formatting
//!
//! Formats expenses for terminal output as a fixed-width table.

use crate::models::Expense;

const TABLE_WIDTH: usize = 70;

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "{:<5} {:<17} {:<20} {:<12} {:>12}",
        expense.id,
        expense.date_string(),
        truncate(&expense.description, 20),
        truncate(&expense.category, 12),
        expense.amount.format_with_symbol(currency_symbol)
    )
}

/// Format all expenses as a table
pub fn format_expense_table(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<5} {:<17} {:<20} {:<12} {:>12}\n",
        "ID", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(TABLE_WIDTH));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency_symbol));
        output.push('\n');
    }

    output.push_str(&"-".repeat(TABLE_WIDTH));
    output.push('\n');

    output
}

/// One-line confirmation for a newly added expense
pub fn format_expense_added(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "Added #{}: {}  {}  [{}]",
        expense.id,
        expense.description,
        expense.amount.format_with_symbol(currency_symbol),
        expense.category
    )
}

/// Truncate a string to at most `max_chars` characters
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
