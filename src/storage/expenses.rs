//! Expense repository for JSON storage
//!
//! Manages loading and saving the ledger to expenses.json

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Ledger};

use super::file_io::{read_json, write_json_atomic};

/// Repository for ledger persistence
///
/// Every mutation goes through [`ExpenseRepository::update`], which holds the
/// write lock across modify-and-save so the in-memory ledger only changes once
/// the file on disk has been replaced.
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Ledger>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Ledger::new()),
        }
    }

    /// Location of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger from disk
    ///
    /// A missing file leaves an empty ledger. On error the in-memory ledger is
    /// left untouched.
    pub fn load(&self) -> ExpenseResult<()> {
        let ledger: Ledger = read_json(&self.path)?;
        ledger
            .check_integrity()
            .map_err(|e| ExpenseError::corrupt(&self.path, e.to_string()))?;

        debug!("Loaded {} expenses from {}", ledger.len(), self.path.display());

        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = ledger;
        Ok(())
    }

    /// Copy of the current ledger
    pub fn snapshot(&self) -> ExpenseResult<Ledger> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> ExpenseResult<Vec<Expense>> {
        Ok(self.snapshot()?.as_slice().to_vec())
    }

    /// Count expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }

    /// Apply a mutation and persist it
    ///
    /// `f` runs against a copy of the ledger. If it fails, or the file cannot
    /// be written, the in-memory ledger and the file are both left unchanged.
    pub fn update<T, F>(&self, f: F) -> ExpenseResult<T>
    where
        F: FnOnce(&mut Ledger) -> ExpenseResult<T>,
    {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let mut working = data.clone();
        let result = f(&mut working)?;

        write_json_atomic(&self.path, &working)?;
        *data = working;

        Ok(result)
    }
}
