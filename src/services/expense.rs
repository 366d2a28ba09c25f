//! Expense service
//!
//! Business logic for recording, listing, deleting and summarizing expenses.
//! Every mutation is persisted before it is reported as done.

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money};
use crate::reports::ExpenseSummary;
use crate::storage::Storage;

/// Delete target that means "do nothing"
pub const CANCEL_ID: u32 = 0;

/// Input for adding a new expense
#[derive(Debug, Clone, Default)]
pub struct AddExpenseInput {
    /// What the money was spent on; must not be blank
    pub description: String,
    /// Category; blank or missing means "Other"
    pub category: Option<String>,
    /// Amount as typed by the user
    pub amount: String,
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The cancel sentinel was given; nothing changed
    Cancelled,
    /// The expense was removed; it carries the ID it had before removal
    Deleted(Expense),
}

/// Parse user input as a strictly positive amount, rounded to cents
pub fn parse_amount(input: &str) -> ExpenseResult<Money> {
    let amount =
        Money::parse(input).map_err(|_| ExpenseError::InvalidAmount(input.trim().to_string()))?;

    if !amount.is_positive() {
        return Err(ExpenseError::InvalidAmount(input.trim().to_string()));
    }

    Ok(amount)
}

/// Check that a description has visible content
pub fn validate_description(description: &str) -> ExpenseResult<&str> {
    let description = description.trim();
    if description.is_empty() {
        return Err(ExpenseError::empty_description());
    }
    Ok(description)
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense timestamped with the current local time
    pub fn add(&self, input: AddExpenseInput) -> ExpenseResult<Expense> {
        self.add_at(input, Local::now().naive_local())
    }

    /// Record a new expense with an explicit timestamp
    pub fn add_at(&self, input: AddExpenseInput, now: NaiveDateTime) -> ExpenseResult<Expense> {
        let description = validate_description(&input.description)?;
        let amount = parse_amount(&input.amount)?;
        let category = input.category.as_deref().unwrap_or_default();

        let expense = self.storage.expenses.update(|ledger| {
            let added = ledger.add(now, description, category, amount)?;
            Ok(added.clone())
        })?;

        info!(
            "Added expense #{} '{}' ({})",
            expense.id, expense.description, expense.amount
        );
        self.storage.log_create(&expense);

        Ok(expense)
    }

    /// List all expenses in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Count expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        self.storage.expenses.count()
    }

    /// Delete an expense and renumber the remaining ones
    ///
    /// [`CANCEL_ID`] cancels without touching the ledger or the file. An
    /// unknown ID is reported as [`ExpenseError::NotFound`], also without
    /// writing anything.
    pub fn delete(&self, id: u32) -> ExpenseResult<DeleteOutcome> {
        if id == CANCEL_ID {
            debug!("Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let target = ExpenseId::new(id);
        let removed = self.storage.expenses.update(|ledger| {
            ledger
                .remove(target)
                .ok_or_else(|| ExpenseError::expense_not_found(target))
        })?;

        info!("Deleted expense #{} '{}'", removed.id, removed.description);
        self.storage.log_delete(&removed);

        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Totals per category and overall
    pub fn summarize(&self) -> ExpenseResult<ExpenseSummary> {
        let ledger = self.storage.expenses.snapshot()?;
        ExpenseSummary::generate(&ledger)
    }
}
