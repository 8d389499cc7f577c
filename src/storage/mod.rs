//! Storage layer for Pocket Ledger
//!
//! Provides the single JSON slot holding all transactions, atomic writes,
//! and the audit trail that accompanies every mutation.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_json, read_json_or_default, write_json_atomic};
pub use transactions::TransactionStore;

use tracing::warn;

use crate::audit::{AuditEntry, AuditTrail};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::Transaction;

/// Main storage coordinator
pub struct Storage {
    paths: LedgerPaths,
    pub transactions: TransactionStore,
    audit: AuditTrail,
}

impl Storage {
    /// Create a new Storage instance with an empty, not yet loaded store
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionStore::new(paths.transactions_file()),
            audit: AuditTrail::new(paths.audit_log()),
            paths,
        })
    }

    /// Create storage and load the transaction slot
    pub fn open(paths: LedgerPaths) -> Result<Self, LedgerError> {
        let mut storage = Self::new(paths)?;
        storage.transactions.load();
        Ok(storage)
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }

    /// Record an add in the audit log
    pub fn log_create(&self, txn: &Transaction) {
        self.record(AuditEntry::create(
            txn.id.to_string(),
            Some(txn.description.clone()),
            txn,
        ));
    }

    /// Record a delete in the audit log
    pub fn log_delete(&self, txn: &Transaction) {
        self.record(AuditEntry::delete(
            txn.id.to_string(),
            Some(txn.description.clone()),
            txn,
        ));
    }

    /// Record a clear-all in the audit log
    pub fn log_clear(&self, count: usize) {
        self.record(AuditEntry::clear(count));
    }

    /// The slot is already saved when this runs; a failed append only warns
    fn record(&self, entry: AuditEntry) {
        if let Err(e) = self.audit.append(&entry) {
            warn!(operation = %entry.operation, error = %e, "audit entry not written");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{Money, TransactionId, TransactionType};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.transactions.is_empty());
    }

    #[test]
    fn test_audit_helpers() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let txn = Transaction::new(
            TransactionId::from_raw(5),
            "01/01/2026",
            TransactionType::Expense,
            "Food",
            "Lunch",
            Money::from_major(250),
        );
        storage.log_create(&txn);
        storage.log_delete(&txn);
        storage.log_clear(0);

        let ops: Vec<Operation> = storage
            .audit()
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Delete, Operation::Clear]);
    }

    #[test]
    fn test_audit_failure_is_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::create_dir_all(paths.audit_log()).unwrap();
        let storage = Storage::new(paths).unwrap();

        storage.log_clear(3);
        assert!(storage.audit().entries().is_err());
    }
}
