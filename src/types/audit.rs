//! Audit log entry types
//!
//! One entry is written per transaction attempt. Entries are observational
//! only; nothing in the crate reads them back.

use serde::Serialize;

/// Result of a transaction attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

/// A single audit record
///
/// Fields that were never resolved (e.g. the ledger file of a rejected
/// transaction, or the debit code of a payload that failed to parse) are
/// left out of the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEntry {
    pub outcome: Outcome,

    /// Date as delivered with the message (YYYY-MM-DD)
    pub date: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,

    /// Amount as written to the ledger on success, as typed on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,

    /// Raw payload, only recorded when it could not be parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,

    /// Ledger file the record was appended to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Transfer account written in the `L` line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer: Option<String>,

    /// Reason tags, in check order; empty on success
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}
