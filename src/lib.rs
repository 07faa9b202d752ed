//! QIF Ledger Library
//! # Overview
//!
//! This library turns short, human-typed transaction messages into QIF
//! (Quicken Interchange Format) records appended to per-account ledger files.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (records, audit entries, errors)
//! - [`config`] - Settings file and the built-in chart of accounts
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::chart`] - Chart of accounts
//!   - [`core::parser`] - Tagged payload parser
//!   - [`core::validator`] - Checks against the chart of accounts
//!   - [`core::processor`] - Parse, validate and commit orchestration
//! - [`io`] - QIF rendering, ledger files, audit log, inbox input, notes
//! - [`pipeline`] - One run over an inbox
//!
//! # Payload Grammar
//!
//! ```text
//! d <debit code> -c <credit code> -a <amount> -m "<memo>"
//! ```
//!
//! Tags may appear in any order; the memo is optional.
//!
//! # Output Layout
//!
//! - `<output>/transactions/<account>.qif` - one ledger per settlement account
//! - `<output>/logs/audit-<date>.jsonl` - one entry per transaction attempt
//! - `<output>/miscellaneous.txt` - free-text notes

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::config::Settings;
pub use crate::core::{ChartOfAccounts, PayloadParser, TagParser, TransactionProcessor};
pub use crate::io::{AuditLog, LedgerStore};
pub use crate::pipeline::{Pipeline, RunSummary};
pub use crate::types::{DateStamp, ErrorKind, LedgerError, TransactionRecord, ValidatedTransaction};
