//! Diagnostics logging setup
//!
//! CLI commands log to stderr. The TUI owns the terminal, so while it runs
//! events go to `ledger.log` in the base directory instead.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};

/// Environment variable holding the `EnvFilter` directives
pub const LOG_ENV: &str = "POCKET_LEDGER_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Where diagnostics should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(paths: &LedgerPaths, target: LogTarget) -> LedgerResult<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File => {
            paths.ensure_directories()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())
                .map_err(|e| LedgerError::Io(format!("Failed to open log file: {}", e)))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_to_file_creates_log() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        init(&paths, LogTarget::File).unwrap();
        assert!(paths.log_file().exists());

        // A second installation is ignored rather than failing
        init(&paths, LogTarget::Stderr).unwrap();
    }
}
