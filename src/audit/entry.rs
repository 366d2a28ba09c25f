//! Audit entry data structures
//!
//! Defines the structure of audit log entries and the operations they record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Expense;

const ENTITY_TYPE: &str = "expense";

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was added
    Create,
    /// Expense was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// `entity_id` is the expense ID at the time of the operation. IDs are
/// renumbered on delete, so later entries may reuse an ID for a different
/// expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Kind of record affected
    pub entity_type: String,

    /// ID of the affected expense
    pub entity_id: u32,

    /// Description of the affected expense
    pub entity_name: String,

    /// The expense before the operation (deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The expense after the operation (creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a new audit entry for an added expense
    pub fn create(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type: ENTITY_TYPE.to_string(),
            entity_id: expense.id.get(),
            entity_name: expense.description.clone(),
            before: None,
            after: serde_json::to_value(expense).ok(),
        }
    }

    /// Create a new audit entry for a deleted expense
    pub fn delete(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type: ENTITY_TYPE.to_string(),
            entity_id: expense.id.get(),
            entity_name: expense.description.clone(),
            before: serde_json::to_value(expense).ok(),
            after: None,
        }
    }

    /// Format the entry as a single human-readable line
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {} #{} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id,
            self.entity_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;

    fn sample() -> Expense {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Expense::new(ExpenseId::new(3), date, "Lunch", "Food", Money::from_cents(25000))
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&sample());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_id, 3);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.as_ref().unwrap()["amount"], 250.0);
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(&sample());

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(&sample());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""operation":"create""#));
        assert!(json.contains(r#""entity_type":"expense""#));
        assert!(!json.contains("before"));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.entity_name, "Lunch");
    }

    #[test]
    fn test_human_readable_format() {
        let formatted = AuditEntry::delete(&sample()).format_human_readable();
        assert!(formatted.contains("DELETE"));
        assert!(formatted.contains("#3"));
        assert!(formatted.contains("Lunch"));
    }
}
