//! Core traits
//!
//! The payload grammar sits behind a trait so that the tag rules can be
//! tightened without touching the processor or its callers.

use crate::types::{DateStamp, LedgerError, TransactionRecord};

/// Turns a transaction payload into a structured record
pub trait PayloadParser {
    /// Parse `payload` sent on `date`
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::MissingField` when debit, credit or amount was
    /// never set.
    fn parse(&self, date: DateStamp, payload: &str) -> Result<TransactionRecord, LedgerError>;
}
