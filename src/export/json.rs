//! JSON Export functionality
//!
//! Exports the ledger together with export metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Ledger, Money};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of expenses
    pub expense_count: usize,

    /// Sum of all amounts
    pub total: Money,

    /// All expenses in ledger order
    pub expenses: Vec<Expense>,
}

impl LedgerExport {
    /// Build an export of a ledger
    pub fn from_ledger(ledger: &Ledger) -> ExpenseResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: ledger.len(),
            total: ledger.total().ok_or(ExpenseError::TotalOverflow)?,
            expenses: ledger.as_slice().to_vec(),
        })
    }
}

/// Export the ledger to JSON
pub fn export_ledger_json<W: Write>(ledger: &Ledger, writer: W, pretty: bool) -> ExpenseResult<()> {
    let export = LedgerExport::from_ledger(ledger)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(format!("Failed to write JSON: {}", e)))
}
