//! Export module for the expense tracker
//!
//! Provides ledger export in two formats:
//! - CSV: spreadsheet-compatible, one row per expense
//! - JSON: machine-readable, with export metadata

pub mod csv;
pub mod json;

pub use self::csv::{export_expenses_csv, CSV_HEADERS};
pub use self::json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
