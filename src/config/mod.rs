//! Configuration module for Pocket Ledger
//!
//! - Platform path resolution (with an environment override)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
