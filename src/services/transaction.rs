//! Transaction service
//!
//! Business rules for the ledger: validated adds, delete by id, and
//! confirmation-gated clears. Every successful mutation is persisted before
//! the call returns; the audit entry that follows it is best effort.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::{Money, Transaction, TransactionId, TransactionType, TransactionValidationError};
use crate::storage::Storage;

use super::filter::TransactionFilter;
use super::summary::{summarize, Summary};

/// Prompt shown before the ledger is wiped
pub const CLEAR_PROMPT: &str = "Clear all transactions?";

const FALLBACK_DATE_FORMAT: &str = "%d/%m/%Y";

/// Raw form input for a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionType,
    pub category: String,
    pub description: String,
    /// Amount exactly as typed; parsed and validated by the service
    pub amount: String,
}

/// Result of a clear-all request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The ledger was emptied; holds the number of records removed
    Cleared(usize),
    /// The user declined; nothing changed
    Declined,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
    settings: &'a Settings,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Validate input and add a new transaction at the front of the ledger
    pub fn create(&mut self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        self.create_at(input, Local::now())
    }

    /// Same as [`create`](Self::create) with an explicit clock reading
    pub fn create_at<Tz: TimeZone>(
        &mut self,
        input: CreateTransactionInput,
        now: DateTime<Tz>,
    ) -> LedgerResult<Transaction>
    where
        Tz::Offset: std::fmt::Display,
    {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(TransactionValidationError::EmptyDescription.into());
        }

        let amount = Money::parse(&input.amount)
            .ok()
            .filter(Money::is_positive)
            .ok_or(TransactionValidationError::InvalidAmount)?;

        let id = TransactionId::mint(
            now.with_timezone(&Utc).timestamp_millis(),
            self.storage.transactions.newest_id(),
        );
        let date = format_date(&now, &self.settings.date_format);

        let txn = Transaction::new(
            id,
            date,
            input.kind,
            input.category.trim(),
            description,
            amount,
        );
        txn.validate()?;

        self.storage.transactions.insert_front(txn.clone());
        if let Err(e) = self.storage.transactions.save() {
            self.storage.transactions.remove(txn.id);
            return Err(e);
        }

        self.storage.log_create(&txn);
        info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "transaction added");

        Ok(txn)
    }

    /// Find a transaction by ID string
    pub fn find(&self, identifier: &str) -> Option<&Transaction> {
        identifier
            .parse::<TransactionId>()
            .ok()
            .and_then(|id| self.storage.transactions.get(id))
    }

    /// Delete the transaction with `id`
    ///
    /// Returns the removed record, or `None` when nothing matched (which is
    /// not an error and leaves the ledger untouched).
    pub fn delete(&mut self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        let Some(removed) = self.storage.transactions.remove(id) else {
            info!(%id, "delete requested for unknown id");
            return Ok(None);
        };

        self.storage.transactions.save()?;
        self.storage.log_delete(&removed);
        info!(%id, "transaction deleted");

        Ok(Some(removed))
    }

    /// Empty the ledger once `confirm` approves [`CLEAR_PROMPT`]
    pub fn clear_all<F>(&mut self, confirm: F) -> LedgerResult<ClearOutcome>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(CLEAR_PROMPT) {
            return Ok(ClearOutcome::Declined);
        }

        let count = self.storage.transactions.clear();
        self.storage.transactions.save()?;
        self.storage.log_clear(count);
        info!(count, "ledger cleared");

        Ok(ClearOutcome::Cleared(count))
    }

    /// Transactions matching `filter`, newest first
    pub fn list(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        filter.apply(self.storage.transactions.records())
    }

    /// Totals over the transactions matching `filter`
    pub fn summary(&self, filter: &TransactionFilter) -> Summary {
        summarize(self.list(filter))
    }
}

/// Format `now` with a user-supplied strftime pattern
///
/// Invalid patterns fall back to day/month/year instead of panicking.
pub fn format_date<Tz: TimeZone>(now: &DateTime<Tz>, pattern: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let valid = !pattern.is_empty()
        && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
    if valid {
        now.format(pattern).to_string()
    } else {
        warn!(pattern, "invalid date format, using default");
        now.format(FALLBACK_DATE_FORMAT).to_string()
    }
}
