//! Account-related types for the QIF ledger

use serde::{Deserialize, Serialize};
use std::fmt;

/// QIF account type tag written in a ledger file header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QifType {
    Cash,
    Bank,
    CCard,
}

impl QifType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QifType::Cash => "Cash",
            QifType::Bank => "Bank",
            QifType::CCard => "CCard",
        }
    }
}

impl fmt::Display for QifType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category table an account code belongs to
///
/// Only expenses change how an amount is encoded; the other categories
/// matter for lookup and uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountCategory {
    Asset,
    Liability,
    Revenue,
    Expense,
}

impl fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountCategory::Asset => "assets",
            AccountCategory::Liability => "liabilities",
            AccountCategory::Revenue => "revenues",
            AccountCategory::Expense => "expenses",
        };
        f.write_str(name)
    }
}

/// An entry in the unioned accounts table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Display name, e.g. "Expenses:Auto:Gas"
    pub name: String,
    pub category: AccountCategory,
}
