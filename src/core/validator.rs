//! Transaction validation
//!
//! Checks a parsed [`TransactionRecord`] against the chart of accounts. All
//! checks run on every record so the audit log gets the complete list of
//! problems, reported in a fixed order:
//!
//! 1. debit and credit codes exist in the chart
//! 2. amount is a plain decimal number that converts without rounding, and is
//!    not negative when the debit is an expense
//! 3. date is a real calendar date
//! 4. at least one side is a settlement account

use crate::core::chart::ChartOfAccounts;
use crate::types::{LedgerError, TransactionRecord, ValidatedTransaction};
use rust_decimal::Decimal;
use std::fmt;

/// Every failed check for one record, in check order
///
/// Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    reasons: Vec<LedgerError>,
}

impl Rejection {
    /// The first failed check, used as the outcome reported to callers
    pub fn primary(&self) -> &LedgerError {
        &self.reasons[0]
    }

    pub fn reasons(&self) -> &[LedgerError] {
        &self.reasons
    }

    pub fn into_primary(mut self) -> LedgerError {
        self.reasons.swap_remove(0)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.reasons.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Validate a record against the chart
///
/// # Returns
///
/// * `Ok(ValidatedTransaction)` - every check passed
/// * `Err(Rejection)` - one or more checks failed
pub fn validate(
    chart: &ChartOfAccounts,
    record: TransactionRecord,
) -> Result<ValidatedTransaction, Rejection> {
    let mut reasons = Vec::new();

    for code in [&record.debit, &record.credit] {
        if !chart.contains(code) {
            reasons.push(LedgerError::unknown_account(code));
        }
    }

    // expense debits get a '-' prefix when written, so a typed sign would double up
    let signed_expense = chart.is_expense(&record.debit) && record.amount.trim().starts_with('-');
    let amount = parse_amount(&record.amount).filter(|_| !signed_expense);
    if amount.is_none() {
        reasons.push(LedgerError::invalid_amount(&record.amount));
    }

    let date = record.date.to_naive();
    if date.is_none() {
        reasons.push(LedgerError::invalid_date(record.date));
    }

    if !chart.is_settlement(&record.debit) && !chart.is_settlement(&record.credit) {
        reasons.push(LedgerError::no_settlement_account(
            &record.debit,
            &record.credit,
        ));
    }

    match (amount, date) {
        (Some(amount), Some(date)) if reasons.is_empty() => {
            Ok(ValidatedTransaction::new(record, date, amount))
        }
        _ => Err(Rejection { reasons }),
    }
}

/// Parse a typed amount
///
/// Only `[-]digits[.digits]` is accepted, and only when the value fits a
/// `Decimal` exactly: the ledger gets the typed text, so it must mean the
/// same number the validator checked.
fn parse_amount(amount: &str) -> Option<Decimal> {
    let amount = amount.trim();
    let unsigned = amount.strip_prefix('-').unwrap_or(amount);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "0"));
    let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || !is_digits(fraction) {
        return None;
    }
    Decimal::from_str_exact(amount).ok()
}
