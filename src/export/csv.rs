//! CSV Export functionality
//!
//! Exports the ledger as a spreadsheet-compatible CSV file.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Column headers of the exported file
pub const CSV_HEADERS: [&str; 5] = ["ID", "Date", "Description", "Category", "Amount"];

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;

    for expense in expenses {
        csv_writer.write_record([
            expense.id.to_string(),
            expense.date_string(),
            expense.description.clone(),
            expense.category.clone(),
            expense.amount.to_string(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| crate::error::ExpenseError::Export(e.to_string()))?;

    Ok(())
}
