//! Append-only audit trail
//!
//! One JSON object per line. A line that no longer parses (a torn write, a
//! hand edit) is skipped on read so the rest of the history stays visible.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use tracing::warn;

use crate::error::{LedgerError, LedgerResult};

use super::entry::AuditEntry;

/// The `audit.log` file next to the transaction slot
#[derive(Debug, Clone)]
pub struct AuditTrail {
    path: PathBuf,
}

impl AuditTrail {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append one entry and flush it
    pub fn append(&self, entry: &AuditEntry) -> LedgerResult<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| LedgerError::Json(format!("Failed to encode audit entry: {}", e)))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LedgerError::Io(format!("Failed to open audit log: {}", e)))?;
        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| LedgerError::Io(format!("Failed to append audit entry: {}", e)))
    }

    /// Every readable entry, oldest first
    pub fn entries(&self) -> LedgerResult<Vec<AuditEntry>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LedgerError::Io(format!("Failed to read audit log: {}", e))),
        };

        let entries = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(index, line)| match serde_json::from_str(line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(line = index + 1, error = %e, "skipping unreadable audit entry");
                    None
                }
            })
            .collect();
        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        let mut entries = self.entries()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use serde_json::json;
    use tempfile::TempDir;

    fn trail() -> (AuditTrail, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let trail = AuditTrail::new(temp_dir.path().join("audit.log"));
        (trail, temp_dir)
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let (trail, _temp) = trail();
        assert!(trail.entries().unwrap().is_empty());
        assert!(trail.recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_recent_keeps_tail_in_order() {
        let (trail, _temp) = trail();
        for i in 0..10 {
            trail
                .append(&AuditEntry::create(i.to_string(), None, &json!({ "index": i })))
                .unwrap();
        }
        trail.append(&AuditEntry::clear(10)).unwrap();

        let recent = trail.recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].entity_id.as_deref(), Some("8"));
        assert_eq!(recent[1].entity_id.as_deref(), Some("9"));
        assert_eq!(recent[2].operation, Operation::Clear);

        assert_eq!(trail.recent(100).unwrap().len(), 11);
    }

    #[test]
    fn test_unreadable_lines_are_skipped() {
        let (trail, temp) = trail();
        trail
            .append(&AuditEntry::create("1", Some("Tea".into()), &json!({ "amount": 10 })))
            .unwrap();
        let mut file = OpenOptions::new()
            .append(true)
            .open(temp.path().join("audit.log"))
            .unwrap();
        writeln!(file, "{{\"timestamp\": \"trunc").unwrap();
        writeln!(file).unwrap();
        trail.append(&AuditEntry::clear(1)).unwrap();

        let ops: Vec<Operation> = trail.entries().unwrap().into_iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Clear]);
    }

    #[test]
    fn test_history_survives_reopen() {
        let (trail, temp) = trail();
        trail.append(&AuditEntry::clear(0)).unwrap();

        let reopened = AuditTrail::new(temp.path().join("audit.log"));
        assert_eq!(reopened.entries().unwrap().len(), 1);
    }
}
