//! Pocket Ledger - a personal income and expense ledger for the terminal
//!
//! This library provides the core functionality for the `ledger` binary:
//! recording income and expense transactions, filtering them, and totalling
//! the filtered subset.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, ids, transactions)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (rules, filters, totals)
//! - `audit`: Audit logging system
//! - `display`: Plain-text rendering for CLI output
//! - `cli`: One-shot command handlers
//! - `tui`: Interactive terminal interface
//! - `logging`: Diagnostics subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_ledger::config::{LedgerPaths, Settings};
//! use pocket_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::open(paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{LedgerError, LedgerResult};
