//! Core business logic module
//!
//! This module contains the transaction processing components:
//! - `chart` - Chart of accounts (read-only reference data)
//! - `traits` - Trait abstraction for the payload grammar
//! - `parser` - Tagged payload parser
//! - `validator` - Checks against the chart of accounts
//! - `processor` - Parse, validate and commit orchestration

pub mod chart;
pub mod parser;
pub mod processor;
pub mod traits;
pub mod validator;

pub use chart::{ChartOfAccounts, Settlement};
pub use parser::TagParser;
pub use processor::TransactionProcessor;
pub use traits::PayloadParser;
pub use validator::{validate, Rejection};
