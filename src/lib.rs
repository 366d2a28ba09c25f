//! Expense Tracker - personal expense logging from the terminal
//!
//! This library provides the core functionality of the `expense` binary: an
//! ordered ledger of expenses (date, description, category, amount) kept in
//! a JSON file, with operations to add, list, delete and summarize them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, the ledger)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `reports`: Category and grand totals
//! - `display`: Terminal table formatting
//! - `export`: CSV and JSON export
//! - `cli`: Subcommand handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
//! use expense_tracker::services::{AddExpenseInput, ExpenseService};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//!
//! let service = ExpenseService::new(&storage);
//! service.add(AddExpenseInput {
//!     description: "Lunch".into(),
//!     category: Some("Food".into()),
//!     amount: "250".into(),
//! })?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
