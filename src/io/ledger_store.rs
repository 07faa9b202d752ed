//! Ledger file store
//!
//! Maps a validated transaction to its settlement account's ledger file under
//! `<output>/transactions/` and appends the rendered record.
//!
//! # File lifecycle
//!
//! - The transactions directory is created (recursively) on the first commit.
//! - A ledger file is created on first use with its account header. Creation
//!   uses `create_new`, so the header is written exactly once and never
//!   rewritten.
//! - Each record is appended with a single write on a freshly opened handle
//!   that is closed before `commit` returns. If the write fails, the file is
//!   truncated back to its previous length so no partial record remains.
//!
//! # Concurrency
//!
//! The store assumes it is the only writer of its output directory. Running
//! two processes against the same directory is not supported.

use crate::core::chart::{ChartOfAccounts, Settlement};
use crate::io::qif_format::{encode_transaction, render_header, EncodedTransaction};
use crate::types::{LedgerError, ValidatedTransaction};
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Result of a successful commit
#[derive(Debug, Clone, PartialEq)]
pub struct Committed {
    /// Ledger file name, e.g. "visa.qif"
    pub file_name: String,
    /// Full path of the ledger file
    pub path: PathBuf,
    /// Whether this commit created the file
    pub created: bool,
    /// What was written
    pub encoded: EncodedTransaction,
}

#[derive(Debug, Clone)]
pub struct LedgerStore {
    transactions_dir: PathBuf,
}

impl LedgerStore {
    /// Create a store writing to `<output_dir>/transactions`
    ///
    /// Nothing is touched on disk until the first commit.
    pub fn new(output_dir: &Path) -> Self {
        LedgerStore {
            transactions_dir: output_dir.join("transactions"),
        }
    }

    pub fn transactions_dir(&self) -> &Path {
        &self.transactions_dir
    }

    /// Append a validated transaction to its ledger file
    ///
    /// # Returns
    ///
    /// * `Ok(Committed)` - the record is fully written
    /// * `Err(LedgerError)` - nothing was appended
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::IoError` if the directory or file cannot be
    /// created or written.
    pub fn commit(
        &self,
        chart: &ChartOfAccounts,
        tx: &ValidatedTransaction,
    ) -> Result<Committed, LedgerError> {
        let (code, settlement) = resolve_settlement(chart, tx.debit(), tx.credit())
            .ok_or_else(|| LedgerError::no_settlement_account(tx.debit(), tx.credit()))?;
        let encoded = encode_transaction(chart, tx);

        fs::create_dir_all(&self.transactions_dir)
            .map_err(|e| LedgerError::io_at(&self.transactions_dir, e))?;

        let path = self.transactions_dir.join(&settlement.file_name);
        let account_name = chart.account_name(code).unwrap_or(code);
        let header = render_header(account_name, settlement.qif_type);
        let created = create_with_header(&path, &header)?;

        append_record(&path, &encoded.text)?;

        Ok(Committed {
            file_name: settlement.file_name.clone(),
            path,
            created,
            encoded,
        })
    }
}

/// Settlement account whose ledger receives the transaction
///
/// The debit side wins when both sides are settlement accounts.
pub fn resolve_settlement<'a>(
    chart: &'a ChartOfAccounts,
    debit: &'a str,
    credit: &'a str,
) -> Option<(&'a str, &'a Settlement)> {
    chart
        .settlement(debit)
        .map(|s| (debit, s))
        .or_else(|| chart.settlement(credit).map(|s| (credit, s)))
}

/// Create `path` holding only `header`, unless it already exists
///
/// Returns whether the file was created.
fn create_with_header(path: &Path, header: &str) -> Result<bool, LedgerError> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(LedgerError::io_at(path, e)),
    };

    if let Err(e) = file.write_all(header.as_bytes()).and_then(|_| file.sync_all()) {
        drop(file);
        // A headerless ledger would never get its header later
        let _ = fs::remove_file(path);
        return Err(LedgerError::io_at(path, e));
    }

    log::info!("Created ledger file {}", path.display());
    Ok(true)
}

/// Append one complete record, rolling back on failure
fn append_record(path: &Path, text: &str) -> Result<(), LedgerError> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::io_at(path, e))?;

    append_or_truncate(&mut file, text.as_bytes(), path).map_err(|e| LedgerError::io_at(path, e))
}

/// Ledger handle that can be cut back to an earlier length
trait Truncate: Write {
    fn current_len(&self) -> io::Result<u64>;
    fn truncate_to(&mut self, len: u64) -> io::Result<()>;
    fn sync(&mut self) -> io::Result<()>;
}

impl Truncate for File {
    fn current_len(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }

    fn sync(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

/// Write `bytes` in full or restore the handle's previous length
///
/// Returns the write error; a failed rollback is only logged.
fn append_or_truncate<T: Truncate>(target: &mut T, bytes: &[u8], path: &Path) -> io::Result<()> {
    let original_len = target.current_len()?;

    let result = target.write_all(bytes).and_then(|_| target.sync());
    if result.is_err() {
        if let Err(rollback) = target.truncate_to(original_len) {
            log::error!(
                "Could not roll back partial write to {}: {}",
                path.display(),
                rollback
            );
        }
    }
    result
}
