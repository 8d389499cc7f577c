//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod transaction;

pub use transaction::{handle_transaction_command, FilterArgs, TransactionCommands};
