//! The in-memory expense ledger
//!
//! An ordered list of expenses whose IDs always form the range `1..=len`.
//! Adding appends with the next ID; deleting removes a record and renumbers
//! everything after it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::{Expense, ExpenseValidationError};
use super::ids::ExpenseId;
use super::money::Money;

/// Ordered collection of expenses, serialized as a plain JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the ledger has no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Iterate expenses in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    /// All expenses in insertion order
    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    /// The ID the next added expense will receive
    pub fn next_id(&self) -> ExpenseId {
        ExpenseId::from_index(self.expenses.len())
    }

    /// Sum of all amounts, `None` if it overflows
    pub fn total(&self) -> Option<Money> {
        Money::checked_sum(self.expenses.iter().map(|e| e.amount))
    }

    /// Append a new expense with the next ID
    ///
    /// Nothing is appended if the expense fails validation.
    pub fn add(
        &mut self,
        date: NaiveDateTime,
        description: &str,
        category: &str,
        amount: Money,
    ) -> Result<&Expense, ExpenseValidationError> {
        let expense = Expense::new(self.next_id(), date, description, category, amount);
        expense.validate()?;

        self.expenses.push(expense);
        let index = self.expenses.len() - 1;
        Ok(&self.expenses[index])
    }

    /// Remove the expense with the given ID and renumber the rest
    ///
    /// Returns the removed expense with its ID as it was before removal.
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let position = self.expenses.iter().position(|e| e.id == id)?;
        let removed = self.expenses.remove(position);
        self.renumber();
        Some(removed)
    }

    /// Reassign IDs `1..=len` in the current order
    pub fn renumber(&mut self) {
        for (index, expense) in self.expenses.iter_mut().enumerate() {
            expense.id = ExpenseId::from_index(index);
        }
    }

    /// Check the invariants a freshly loaded ledger must satisfy
    pub fn check_integrity(&self) -> Result<(), LedgerIntegrityError> {
        for (index, expense) in self.expenses.iter().enumerate() {
            let expected = ExpenseId::from_index(index);
            if expense.id != expected {
                return Err(LedgerIntegrityError::IdOutOfSequence {
                    expected,
                    found: expense.id,
                });
            }

            expense
                .validate()
                .map_err(|source| LedgerIntegrityError::InvalidRecord {
                    id: expense.id,
                    source,
                })?;
        }

        Ok(())
    }
}

impl From<Vec<Expense>> for Ledger {
    fn from(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}

/// Reasons a stored ledger cannot be accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerIntegrityError {
    IdOutOfSequence {
        expected: ExpenseId,
        found: ExpenseId,
    },
    InvalidRecord {
        id: ExpenseId,
        source: ExpenseValidationError,
    },
}

impl fmt::Display for LedgerIntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdOutOfSequence { expected, found } => {
                write!(f, "expected expense ID {} but found {}", expected, found)
            }
            Self::InvalidRecord { id, source } => write!(f, "expense {}: {}", id, source),
        }
    }
}

impl std::error::Error for LedgerIntegrityError {}
