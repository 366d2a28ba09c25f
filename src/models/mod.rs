//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: the
//! expense record, its identifier, monetary amounts and the ledger itself.

pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;

pub use expense::{Expense, ExpenseValidationError, DATE_FORMAT, DEFAULT_CATEGORY};
pub use ids::ExpenseId;
pub use ledger::{Ledger, LedgerIntegrityError};
pub use money::{Money, MoneyParseError};
