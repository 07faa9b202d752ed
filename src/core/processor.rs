//! Transaction processor
//!
//! This module provides the TransactionProcessor that turns a `(date, payload)`
//! pair into a ledger entry by coordinating the parser, validator and
//! ledger store.
//!
//! Every call writes exactly one audit entry: success once the record is on
//! disk, failure otherwise. A failure never stops the caller's batch.

use crate::core::chart::ChartOfAccounts;
use crate::core::parser::TagParser;
use crate::core::traits::PayloadParser;
use crate::core::validator::{validate, Rejection};
use crate::io::audit_log::AuditLog;
use crate::io::ledger_store::{resolve_settlement, Committed, LedgerStore};
use crate::types::{
    AuditEntry, DateStamp, LedgerError, Outcome, TransactionRecord, ValidatedTransaction,
};
use std::path::Path;

/// Transaction processor
///
/// Owns the chart of accounts and lends it to each stage.
pub struct TransactionProcessor<P = TagParser> {
    chart: ChartOfAccounts,
    parser: P,
    store: LedgerStore,
    audit: AuditLog,
}

impl TransactionProcessor<TagParser> {
    /// Create a processor writing under `output_dir` with today's audit log
    pub fn new(chart: ChartOfAccounts, output_dir: &Path) -> Self {
        TransactionProcessor::with_parts(
            chart,
            TagParser,
            LedgerStore::new(output_dir),
            AuditLog::for_today(output_dir),
        )
    }
}

impl<P: PayloadParser> TransactionProcessor<P> {
    pub fn with_parts(chart: ChartOfAccounts, parser: P, store: LedgerStore, audit: AuditLog) -> Self {
        TransactionProcessor {
            chart,
            parser,
            store,
            audit,
        }
    }

    pub fn chart(&self) -> &ChartOfAccounts {
        &self.chart
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.audit
    }

    /// Process a single transaction payload
    ///
    /// # Arguments
    ///
    /// * `date` - Date the message was sent
    /// * `payload` - Tagged payload, e.g. `d gas -c visa -a 42.50 -m "fuel"`
    ///
    /// # Returns
    ///
    /// * `Ok(Committed)` - the record was appended to its ledger file
    /// * `Err(LedgerError)` - the primary reason the transaction was not written
    ///
    /// # Errors
    ///
    /// - `MissingField` if the payload lacks debit, credit or amount; the
    ///   validator is not invoked
    /// - a validation error if the record fails any check; no file is touched
    /// - `IoError` if the ledger could not be written
    pub fn process(&self, date: DateStamp, payload: &str) -> Result<Committed, LedgerError> {
        let record = match self.parser.parse(date, payload) {
            Ok(record) => record,
            Err(e) => {
                log::error!("Transaction rejected ({}): '{}'", e, payload);
                self.write_audit(&parse_failure_entry(date, payload, &e));
                return Err(e);
            }
        };

        let validated = match validate(&self.chart, record.clone()) {
            Ok(validated) => validated,
            Err(rejection) => {
                log::error!("Transaction rejected ({}): {:?}", rejection, record);
                self.write_audit(&rejection_entry(&record, &rejection));
                return Err(rejection.into_primary());
            }
        };

        match self.store.commit(&self.chart, &validated) {
            Ok(committed) => {
                log::info!(
                    "Recorded {} {} -> {} ({}) in {}",
                    committed.encoded.amount,
                    validated.debit(),
                    validated.credit(),
                    committed.encoded.transfer,
                    committed.file_name
                );
                self.write_audit(&success_entry(&validated, &committed));
                Ok(committed)
            }
            Err(e) => {
                // Disk full or permissions: likely to hit every following message too
                log::warn!("Ledger write failed, check the output directory: {}", e);
                self.write_audit(&commit_failure_entry(&self.chart, &validated, &e));
                Err(e)
            }
        }
    }

    fn write_audit(&self, entry: &AuditEntry) {
        if let Err(e) = self.audit.record(entry) {
            log::warn!("Could not write audit entry to {}: {}", self.audit.path().display(), e);
        }
    }
}

fn parse_failure_entry(date: DateStamp, payload: &str, error: &LedgerError) -> AuditEntry {
    AuditEntry {
        outcome: Outcome::Failure,
        date: date.to_string(),
        debit: None,
        credit: None,
        amount: None,
        memo: None,
        payload: Some(payload.to_string()),
        file: None,
        transfer: None,
        reasons: vec![error.reason().to_string()],
    }
}

fn rejection_entry(record: &TransactionRecord, rejection: &Rejection) -> AuditEntry {
    AuditEntry {
        outcome: Outcome::Failure,
        date: record.date.to_string(),
        debit: Some(record.debit.clone()),
        credit: Some(record.credit.clone()),
        amount: Some(record.amount.clone()),
        memo: Some(record.memo.clone()),
        payload: None,
        file: None,
        transfer: None,
        reasons: rejection
            .reasons()
            .iter()
            .map(|r| r.reason().to_string())
            .collect(),
    }
}

fn commit_failure_entry(
    chart: &ChartOfAccounts,
    tx: &ValidatedTransaction,
    error: &LedgerError,
) -> AuditEntry {
    let record = tx.record();
    AuditEntry {
        outcome: Outcome::Failure,
        date: record.date.to_string(),
        debit: Some(record.debit.clone()),
        credit: Some(record.credit.clone()),
        amount: Some(record.amount.clone()),
        memo: Some(record.memo.clone()),
        payload: None,
        file: resolve_settlement(chart, tx.debit(), tx.credit())
            .map(|(_, settlement)| settlement.file_name.clone()),
        transfer: None,
        reasons: vec![error.reason().to_string()],
    }
}

fn success_entry(tx: &ValidatedTransaction, committed: &Committed) -> AuditEntry {
    AuditEntry {
        outcome: Outcome::Success,
        date: tx.record().date.to_string(),
        debit: Some(tx.debit().to_string()),
        credit: Some(tx.credit().to_string()),
        amount: Some(committed.encoded.amount.clone()),
        memo: Some(tx.memo().to_string()),
        payload: None,
        file: Some(committed.file_name.clone()),
        transfer: Some(committed.encoded.transfer.clone()),
        reasons: Vec::new(),
    }
}
