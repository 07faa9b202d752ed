//! Transaction audit log
//!
//! Appends one JSON line per transaction attempt to
//! `<output>/logs/audit-<run date>.jsonl`. The file is opened, appended and
//! closed for every entry, so no handle outlives a message.

use crate::types::{AuditEntry, LedgerError};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Audit log for a run started on `run_date`
    pub fn new(output_dir: &Path, run_date: NaiveDate) -> Self {
        let file_name = format!("audit-{}.jsonl", run_date.format("%Y-%m-%d"));
        AuditLog {
            path: output_dir.join("logs").join(file_name),
        }
    }

    /// Audit log for a run started today (local time)
    pub fn for_today(output_dir: &Path) -> Self {
        Self::new(output_dir, chrono::Local::now().date_naive())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an entry
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::IoError` if the log directory or file cannot be
    /// written. Callers treat this as a warning, never as a reason to stop.
    pub fn record(&self, entry: &AuditEntry) -> Result<(), LedgerError> {
        let mut line = serde_json::to_string(entry).map_err(|e| LedgerError::IoError {
            message: format!("cannot serialize audit entry: {}", e),
        })?;
        line.push('\n');

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| LedgerError::io_at(dir, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LedgerError::io_at(&self.path, e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| LedgerError::io_at(&self.path, e))?;

        Ok(())
    }
}
