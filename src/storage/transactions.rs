//! Transaction store backed by a single JSON slot
//!
//! The whole collection lives in memory, newest first, and is written back to
//! `expense_tracker_transactions.json` as one JSON array on every save.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LedgerError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Owns the ordered transaction collection and its durable mirror
#[derive(Debug)]
pub struct TransactionStore {
    path: PathBuf,
    records: Vec<Transaction>,
}

impl TransactionStore {
    /// Create an empty store bound to `path` without touching disk
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: Vec::new(),
        }
    }

    /// Create a store and load whatever the slot currently holds
    pub fn open(path: PathBuf) -> Self {
        let mut store = Self::new(path);
        store.load();
        store
    }

    /// Read the persisted collection from a slot
    ///
    /// An absent or unparseable slot yields an empty collection.
    pub fn read_slot(path: &Path) -> Vec<Transaction> {
        read_json_or_default(path)
    }

    /// Replace the in-memory collection with the slot's contents
    pub fn load(&mut self) {
        self.records = Self::read_slot(&self.path);
        debug!(count = self.records.len(), path = %self.path.display(), "loaded transactions");
    }

    /// Write the full collection to the slot, overwriting prior contents
    pub fn save(&self) -> Result<(), LedgerError> {
        write_json_atomic(&self.path, &self.records)?;
        debug!(count = self.records.len(), "saved transactions");
        Ok(())
    }

    /// Swap in a whole new collection (not persisted until `save`)
    pub fn replace(&mut self, records: Vec<Transaction>) {
        self.records = records;
    }

    /// All records, newest first
    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.records.iter().find(|t| t.id == id)
    }

    /// Highest id in the collection
    pub fn newest_id(&self) -> Option<TransactionId> {
        self.records.iter().map(|t| t.id).max()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for txn in &self.records {
            if !seen.iter().any(|c| c == &txn.category) {
                seen.push(txn.category.clone());
            }
        }
        seen
    }

    /// Put a record at the front of the collection
    pub fn insert_front(&mut self, txn: Transaction) {
        self.records.insert(0, txn);
    }

    /// Remove the record with `id`, if any
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.records.iter().position(|t| t.id == id)?;
        Some(self.records.remove(index))
    }

    /// Drop every record, returning how many there were
    pub fn clear(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        count
    }
}
