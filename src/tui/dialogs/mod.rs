//! Modal dialogs

pub mod clear;
pub mod help;
pub mod transaction;

pub use transaction::{TransactionField, TransactionFormState};
