//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit trail of every mutation.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseError;
use crate::models::Expense;

/// Main storage coordinator, the single owner of the session's ledger
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths, settings: &Settings) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), ExpenseError> {
        self.expenses.load()
    }

    /// Record an added expense in the audit log
    pub fn log_create(&self, expense: &Expense) {
        self.log(AuditEntry::create(expense));
    }

    /// Record a deleted expense in the audit log
    pub fn log_delete(&self, expense: &Expense) {
        self.log(AuditEntry::delete(expense));
    }

    // Runs after the ledger is saved, so failures are only logged.
    fn log(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!("Failed to write audit entry: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn expense() -> Expense {
        let date = NaiveDate::from_ymd_opt(2025, 7, 9)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap();
        Expense::new(ExpenseId::new(1), date, "Fuel", "Travel", Money::from_cents(3000))
    }

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.audit().is_some());
        storage.load_all().unwrap();
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_audit_logging() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        storage.log_create(&expense());
        storage.log_delete(&expense());

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_audit_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let storage = Storage::new(paths.clone(), &settings).unwrap();

        storage.log_create(&expense());

        assert!(storage.audit().is_none());
        assert!(!paths.audit_log().exists());
    }
}
