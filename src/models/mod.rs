//! Core data models for Pocket Ledger
//!
//! The ledger has a single entity, [`Transaction`], plus the value types it
//! is built from.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{DigitGrouping, Money, MoneyParseError};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
