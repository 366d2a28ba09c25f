//! Audit logging for the expense tracker
//!
//! Records every added and deleted expense in an append-only audit log.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, expense ID and
//!   the expense as it was before (delete) or after (create) the operation.
//! - `AuditLogger`: appends entries to the log file as JSON lines and reads
//!   them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
