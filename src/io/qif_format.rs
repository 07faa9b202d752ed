//! QIF format handling for ledger files
//!
//! This module centralizes all QIF format concerns, providing:
//! - Account header rendering
//! - Transaction record rendering
//! - Sign and transfer-account resolution from the chart of accounts
//!
//! All functions are pure (no I/O) for easy testing.

use crate::core::ChartOfAccounts;
use crate::types::{QifType, ValidatedTransaction};
use chrono::NaiveDate;

/// A transaction rendered for a ledger file
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedTransaction {
    /// Account name written in the `L` line
    pub transfer: String,
    /// Amount written in the `T` line
    pub amount: String,
    /// Complete record block, newline terminated
    pub text: String,
}

/// Render the header written once at the top of a new ledger file
///
/// ```
/// use qif_ledger::io::qif_format::render_header;
/// use qif_ledger::types::QifType;
///
/// let header = render_header("Liabilities:Visa", QifType::CCard);
/// assert_eq!(header, "!Account\nNLiabilities:Visa\nTCCard\n^\n!Type:CCard\n");
/// ```
pub fn render_header(account_name: &str, account_type: QifType) -> String {
    format!(
        "!Account\nN{name}\nT{kind}\n^\n!Type:{kind}\n",
        name = account_name,
        kind = account_type
    )
}

/// Render a single transaction record
pub fn render_transaction(date: NaiveDate, transfer: &str, amount: &str, memo: &str) -> String {
    format!(
        "D{}\nT{}\nL{}\nM{}\n^\n",
        format_date(date),
        amount,
        transfer,
        memo
    )
}

/// QIF date, `MM/DD/YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Amount as written to the ledger
///
/// Money spent on an expense leaves the settled account, so an expense debit
/// gets a leading `-`; every other debit is written as typed. The validator
/// never lets a signed amount through on an expense debit.
pub fn signed_amount(chart: &ChartOfAccounts, debit: &str, amount: &str) -> String {
    if chart.is_expense(debit) {
        format!("-{}", amount)
    } else {
        amount.to_string()
    }
}

/// Account name written as the transfer target
///
/// The settled side is implied by the ledger file, so the transfer is the
/// other side: the credit account when the debit is a settlement account,
/// otherwise the debit account.
pub fn transfer_account<'a>(chart: &'a ChartOfAccounts, debit: &'a str, credit: &'a str) -> &'a str {
    let code = if chart.is_settlement(debit) {
        credit
    } else {
        debit
    };
    chart.account_name(code).unwrap_or(code)
}

/// Resolve and render a validated transaction
pub fn encode_transaction(chart: &ChartOfAccounts, tx: &ValidatedTransaction) -> EncodedTransaction {
    let transfer = transfer_account(chart, tx.debit(), tx.credit()).to_string();
    let amount = signed_amount(chart, tx.debit(), tx.amount_text());
    let text = render_transaction(tx.date(), &transfer, &amount, tx.memo());

    EncodedTransaction {
        transfer,
        amount,
        text,
    }
}
