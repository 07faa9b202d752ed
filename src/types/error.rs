//! Error types for the QIF ledger
//!
//! This module defines all error types that can occur while turning a message
//! payload into a ledger entry.
//!
//! # Error Categories
//!
//! - **Parse Errors**: the payload is missing a required tag
//! - **Validation Errors**: unknown account code, non-numeric amount, impossible date,
//!   or no settlement account on either side
//! - **I/O Errors**: directory/file creation or write failure
//! - **Configuration Errors**: invalid settings or chart of accounts (startup only)

use crate::types::transaction::{DateStamp, Field};
use thiserror::Error;

/// Broad category of a [`LedgerError`]
///
/// Parse and validation errors are per-message and never stop a batch.
/// I/O errors are also per-message but may point to a systemic problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Validation,
    Io,
    Config,
}

/// Main error type for the ledger
///
/// Each variant carries enough context to write a useful audit entry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// A required tag never appeared in the payload
    #[error("Parse error: payload has no {field} tag")]
    MissingField {
        /// The field that was never set
        field: Field,
    },

    /// Account code not present in the chart of accounts
    #[error("Unknown account code '{code}'")]
    UnknownAccount {
        /// The code as typed in the message
        code: String,
    },

    /// Amount does not parse as a decimal number
    #[error("Invalid amount '{amount}'")]
    InvalidAmount {
        /// The amount as typed in the message
        amount: String,
    },

    /// Date components do not form a calendar date
    #[error("Invalid date {date}")]
    InvalidDate {
        /// The raw date handed over with the message
        date: DateStamp,
    },

    /// Neither side of the transaction has a ledger file
    #[error("Neither '{debit}' nor '{credit}' is a settlement account")]
    NoSettlementAccount {
        /// Debit code
        debit: String,
        /// Credit code
        credit: String,
    },

    /// I/O error while creating or writing a file
    ///
    /// Never leaves a partially written record behind.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Invalid configuration or chart of accounts
    ///
    /// Only raised at startup, before any message is processed.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// Inbox record could not be read
    #[error("Inbox parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InboxError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the problem
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::InboxError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for LedgerError {
    fn from(error: toml::de::Error) -> Self {
        LedgerError::Config {
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create a MissingField error
    pub fn missing_field(field: Field) -> Self {
        LedgerError::MissingField { field }
    }

    /// Create an UnknownAccount error
    pub fn unknown_account(code: &str) -> Self {
        LedgerError::UnknownAccount {
            code: code.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(date: DateStamp) -> Self {
        LedgerError::InvalidDate { date }
    }

    /// Create a NoSettlementAccount error
    pub fn no_settlement_account(debit: &str, credit: &str) -> Self {
        LedgerError::NoSettlementAccount {
            debit: debit.to_string(),
            credit: credit.to_string(),
        }
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        LedgerError::Config {
            message: message.into(),
        }
    }

    /// Create an IoError with the path that failed
    pub fn io_at(path: &std::path::Path, error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: format!("{}: {}", path.display(), error),
        }
    }

    /// Broad category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::MissingField { .. } | LedgerError::InboxError { .. } => ErrorKind::Parse,
            LedgerError::UnknownAccount { .. }
            | LedgerError::InvalidAmount { .. }
            | LedgerError::InvalidDate { .. }
            | LedgerError::NoSettlementAccount { .. } => ErrorKind::Validation,
            LedgerError::IoError { .. } => ErrorKind::Io,
            LedgerError::Config { .. } => ErrorKind::Config,
        }
    }

    /// Stable reason tag written to the audit log
    pub fn reason(&self) -> &'static str {
        match self {
            LedgerError::MissingField { .. } => "missing_field",
            LedgerError::UnknownAccount { .. } => "unknown_account",
            LedgerError::InvalidAmount { .. } => "invalid_amount",
            LedgerError::InvalidDate { .. } => "invalid_date",
            LedgerError::NoSettlementAccount { .. } => "no_settlement_account",
            LedgerError::IoError { .. } => "io_error",
            LedgerError::Config { .. } => "config_error",
            LedgerError::InboxError { .. } => "inbox_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::missing_field(
        LedgerError::MissingField { field: Field::Amount },
        "Parse error: payload has no amount tag"
    )]
    #[case::unknown_account(
        LedgerError::UnknownAccount { code: "xyz".to_string() },
        "Unknown account code 'xyz'"
    )]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { amount: "ten".to_string() },
        "Invalid amount 'ten'"
    )]
    #[case::invalid_date(
        LedgerError::InvalidDate { date: DateStamp::new(2024, 2, 30) },
        "Invalid date 2024-02-30"
    )]
    #[case::no_settlement(
        LedgerError::NoSettlementAccount { debit: "gas".to_string(), credit: "int".to_string() },
        "Neither 'gas' nor 'int' is a settlement account"
    )]
    #[case::io_error(
        LedgerError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::inbox_error_with_line(
        LedgerError::InboxError { line: Some(3), message: "bad date".to_string() },
        "Inbox parse error at line 3: bad date"
    )]
    #[case::inbox_error_without_line(
        LedgerError::InboxError { line: None, message: "bad date".to_string() },
        "Inbox parse error: bad date"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::parse(LedgerError::missing_field(Field::Debit), ErrorKind::Parse, "missing_field")]
    #[case::unknown(LedgerError::unknown_account("xyz"), ErrorKind::Validation, "unknown_account")]
    #[case::amount(LedgerError::invalid_amount("x"), ErrorKind::Validation, "invalid_amount")]
    #[case::date(
        LedgerError::invalid_date(DateStamp::new(2024, 13, 1)),
        ErrorKind::Validation,
        "invalid_date"
    )]
    #[case::settlement(
        LedgerError::no_settlement_account("gas", "int"),
        ErrorKind::Validation,
        "no_settlement_account"
    )]
    #[case::config(LedgerError::config("bad"), ErrorKind::Config, "config_error")]
    fn test_kind_and_reason(
        #[case] error: LedgerError,
        #[case] kind: ErrorKind,
        #[case] reason: &str,
    ) {
        assert_eq!(error.kind(), kind);
        assert_eq!(error.reason(), reason);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert_eq!(error.kind(), ErrorKind::Io);
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
