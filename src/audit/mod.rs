//! Audit logging for Pocket Ledger
//!
//! Every add, delete and clear is appended to `audit.log` as one JSON object
//! per line (JSONL), with the affected record attached.
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_ledger::audit::{AuditEntry, AuditTrail};
//!
//! let trail = AuditTrail::new(paths.audit_log());
//! trail.append(&AuditEntry::create(txn.id.to_string(), Some(txn.description.clone()), &txn))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditTrail;
