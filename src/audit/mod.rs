//! Audit logging for SpendWise
//!
//! Every successful mutation is recorded as one JSON line in an append-only
//! log, with before/after values where they apply.
//!
//! - `AuditEntry`: timestamp, operation, entity information and optional
//!   before/after values.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
