//! Expense model
//!
//! A single expense entry: when it happened, what it was, which category it
//! belongs to and how much it cost.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Category assigned when the user leaves it blank
pub const DEFAULT_CATEGORY: &str = "Other";

/// On-disk and display format of the expense timestamp (minute precision)
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Position in the ledger, 1-based
    pub id: ExpenseId,

    /// When the expense was recorded
    #[serde(with = "minute_format")]
    pub date: NaiveDateTime,

    /// What the money was spent on
    pub description: String,

    /// Free-form category name
    pub category: String,

    /// Amount spent, always positive
    pub amount: Money,
}

impl Expense {
    /// Create a new expense
    ///
    /// Trims the text fields, substitutes [`DEFAULT_CATEGORY`] for a blank
    /// category and drops seconds from the timestamp. Does not validate; call
    /// [`Expense::validate`] before storing it.
    pub fn new(
        id: ExpenseId,
        date: NaiveDateTime,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
    ) -> Self {
        let description = description.into().trim().to_string();
        let category = normalize_category(&category.into());

        Self {
            id,
            date: truncate_to_minute(date),
            description,
            category,
            amount,
        }
    }

    /// Formatted timestamp, e.g. `2025-01-31 13:05`
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount > Money::MAX {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.description, self.category, self.amount)
    }
}

/// Trim a category name, falling back to [`DEFAULT_CATEGORY`] when blank
pub fn normalize_category(category: &str) -> String {
    let category = category.trim();
    if category.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category.to_string()
    }
}

/// Drop seconds and sub-second precision from a timestamp
pub fn truncate_to_minute(date: NaiveDateTime) -> NaiveDateTime {
    date.date()
        .and_hms_opt(date.hour(), date.minute(), 0)
        .unwrap_or(date)
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, Money::MAX)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

mod minute_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
