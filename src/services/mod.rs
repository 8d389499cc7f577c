//! Service layer for Pocket Ledger
//!
//! The service layer provides business logic on top of the storage layer:
//! validation and mutation rules, filtering, and aggregation.

pub mod filter;
pub mod summary;
pub mod transaction;

pub use filter::TransactionFilter;
pub use summary::{summarize, Summary};
pub use transaction::{ClearOutcome, CreateTransactionInput, TransactionService, CLEAR_PROMPT};
