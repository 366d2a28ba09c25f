//! Strongly-typed expense identifier
//!
//! Expense IDs are display positions: they always run `1..=N` and are
//! reassigned when an expense is deleted, so they are not stable keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One-based position of an expense in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u32);

impl ExpenseId {
    /// Create an ID from its numeric value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The ID of the record at a zero-based ledger index
    pub fn from_index(index: usize) -> Self {
        Self(u32::try_from(index + 1).unwrap_or(u32::MAX))
    }

    /// Get the numeric value
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for ExpenseId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
