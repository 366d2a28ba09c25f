//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence and auditing of each operation.

pub mod expense;

pub use expense::{
    parse_amount, validate_description, AddExpenseInput, DeleteOutcome, ExpenseService, CANCEL_ID,
};
