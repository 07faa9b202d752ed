//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account categories and QIF type tags
//! - `transaction`: Raw and validated transaction records
//! - `audit`: Audit log entries
//! - `error`: Error types for the ledger

pub mod account;
pub mod audit;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountCategory, QifType};
pub use audit::{AuditEntry, Outcome};
pub use error::{ErrorKind, LedgerError};
pub use transaction::{DateStamp, Field, TransactionRecord, ValidatedTransaction};
