//! CLI command for data export
//!
//! Writes the ledger to a file as CSV or JSON. Never modifies the ledger.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_ledger_json};
use crate::models::Ledger;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per expense
    Csv,
    /// JSON document with export metadata
    Json,
}

/// Handle the export command
///
/// An output of `-` writes to stdout.
pub fn handle_export_command(
    storage: &Storage,
    output: &Path,
    format: ExportFormat,
) -> ExpenseResult<()> {
    let ledger = storage.expenses.snapshot()?;

    if output == Path::new("-") {
        let stdout = io::stdout();
        return write_export(&ledger, stdout.lock(), format);
    }

    let file = File::create(output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    write_export(&ledger, BufWriter::new(file), format)?;

    println!("Exported {} expense(s) to: {}", ledger.len(), output.display());
    Ok(())
}

fn write_export<W: Write>(ledger: &Ledger, mut writer: W, format: ExportFormat) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(ledger.as_slice(), &mut writer)?,
        ExportFormat::Json => {
            export_ledger_json(ledger, &mut writer, true)?;
            writeln!(writer)?;
        }
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to write export: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::config::settings::Settings;
    use crate::services::{AddExpenseInput, ExpenseService};
    use std::fs;
    use tempfile::TempDir;

    fn storage_with_lunch() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();
        ExpenseService::new(&storage)
            .add(AddExpenseInput {
                description: "Lunch".into(),
                category: Some("Food".into()),
                amount: "250".into(),
            })
            .unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_csv_file() {
        let (temp_dir, storage) = storage_with_lunch();
        let output = temp_dir.path().join("out.csv");

        handle_export_command(&storage, &output, ExportFormat::Csv).unwrap();

        let contents = fs::read_to_string(&output).unwrap();
        assert!(contents.starts_with("ID,Date,Description,Category,Amount"));
        assert!(contents.contains("Lunch,Food,250.00"));
    }

    #[test]
    fn test_export_json_file() {
        let (temp_dir, storage) = storage_with_lunch();
        let output = temp_dir.path().join("out.json");

        handle_export_command(&storage, &output, ExportFormat::Json).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["expense_count"], 1);
        assert_eq!(value["expenses"][0]["description"], "Lunch");
    }

    #[test]
    fn test_export_bad_path() {
        let (temp_dir, storage) = storage_with_lunch();
        let output = temp_dir.path().join("missing").join("out.csv");

        let err = handle_export_command(&storage, &output, ExportFormat::Csv).unwrap_err();
        assert!(matches!(err, ExpenseError::Export(_)));
    }
}
