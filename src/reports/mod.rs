//! Reports module
//!
//! Read-only analyses of the ledger.

pub mod summary;

pub use summary::{CategoryTotal, ExpenseSummary};
