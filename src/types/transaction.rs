//! Transaction-related types for the QIF ledger
//!
//! This module defines the raw date handed over with a message, the
//! transaction record produced by the parser, and the validated form that the
//! ledger store accepts.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::fmt;

/// Raw calendar date delivered alongside a message
///
/// The components are kept exactly as received so that an impossible date
/// (e.g. February 30th) reaches the validator instead of being silently
/// rejected upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateStamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateStamp {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        DateStamp { year, month, day }
    }

    /// Convert to a calendar date, if the components form one
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for DateStamp {
    fn from(date: NaiveDate) -> Self {
        DateStamp::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Fields of a transaction payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Debit,
    Credit,
    Amount,
    Memo,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Debit => "debit",
            Field::Credit => "credit",
            Field::Amount => "amount",
            Field::Memo => "memo",
        };
        f.write_str(name)
    }
}

/// Transaction as typed in a message
///
/// All fields are unchecked text; the validator decides whether the record
/// can be written to a ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Date the message was sent
    pub date: DateStamp,

    /// Account code on the debit side
    pub debit: String,

    /// Account code on the credit side
    pub credit: String,

    /// Amount as typed (e.g. "42.50")
    pub amount: String,

    /// Free-text memo, empty when the payload has none
    pub memo: String,
}

/// Transaction that passed every validation check
///
/// Only the validator constructs this type, so anything holding one is
/// guaranteed to reference known accounts, a real date, an exactly
/// representable decimal amount and at least one settlement account.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTransaction {
    record: TransactionRecord,
    date: NaiveDate,
    amount: Decimal,
}

impl ValidatedTransaction {
    pub(crate) fn new(record: TransactionRecord, date: NaiveDate, amount: Decimal) -> Self {
        ValidatedTransaction {
            record,
            date,
            amount,
        }
    }

    pub fn record(&self) -> &TransactionRecord {
        &self.record
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Amount text as typed, without surrounding whitespace
    pub fn amount_text(&self) -> &str {
        self.record.amount.trim()
    }

    pub fn debit(&self) -> &str {
        &self.record.debit
    }

    pub fn credit(&self) -> &str {
        &self.record.credit
    }

    pub fn memo(&self) -> &str {
        &self.record.memo
    }
}
