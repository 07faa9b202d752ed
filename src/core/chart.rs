//! Chart of accounts
//!
//! Immutable reference data built once from [`ChartConfig`] at startup and
//! lent to the parser, validator, encoder and ledger store for every message.
//!
//! # Invariants
//!
//! - every code appears in at most one category table
//! - every settlement code has a QIF type and a name in the category union
//! - codes are lowercase ASCII letters; file stems are plain file names

use crate::config::ChartConfig;
use crate::types::{Account, AccountCategory, LedgerError, QifType};
use std::collections::{BTreeMap, HashMap};

/// A code backed by a physical ledger file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// File name inside `transactions/`, e.g. "visa.qif"
    pub file_name: String,
    pub qif_type: QifType,
}

#[derive(Debug, Clone)]
pub struct ChartOfAccounts {
    accounts: HashMap<String, Account>,
    settlements: HashMap<String, Settlement>,
}

impl ChartOfAccounts {
    /// Build the chart from configured tables
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Config` if any invariant listed in the module
    /// documentation does not hold.
    pub fn from_config(config: &ChartConfig) -> Result<Self, LedgerError> {
        let mut accounts: HashMap<String, Account> = HashMap::new();

        let tables = [
            (AccountCategory::Asset, &config.assets),
            (AccountCategory::Liability, &config.liabilities),
            (AccountCategory::Revenue, &config.revenues),
            (AccountCategory::Expense, &config.expenses),
        ];
        for (category, table) in tables {
            for (code, name) in table {
                check_code(code)?;
                if let Some(existing) = accounts.get(code) {
                    return Err(LedgerError::config(format!(
                        "account code '{}' appears in both {} and {}",
                        code, existing.category, category
                    )));
                }
                accounts.insert(
                    code.clone(),
                    Account {
                        name: name.clone(),
                        category,
                    },
                );
            }
        }

        let settlements = build_settlements(config, &accounts)?;

        Ok(ChartOfAccounts {
            accounts,
            settlements,
        })
    }

    pub fn account(&self, code: &str) -> Option<&Account> {
        self.accounts.get(code)
    }

    pub fn account_name(&self, code: &str) -> Option<&str> {
        self.accounts.get(code).map(|a| a.name.as_str())
    }

    /// Whether the code is known to the chart
    pub fn contains(&self, code: &str) -> bool {
        self.accounts.contains_key(code)
    }

    pub fn is_expense(&self, code: &str) -> bool {
        self.accounts
            .get(code)
            .is_some_and(|a| a.category == AccountCategory::Expense)
    }

    pub fn settlement(&self, code: &str) -> Option<&Settlement> {
        self.settlements.get(code)
    }

    pub fn is_settlement(&self, code: &str) -> bool {
        self.settlements.contains_key(code)
    }

    /// Settlement codes in sorted order
    pub fn settlement_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.settlements.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

fn build_settlements(
    config: &ChartConfig,
    accounts: &HashMap<String, Account>,
) -> Result<HashMap<String, Settlement>, LedgerError> {
    let mut settlements = HashMap::new();

    for (code, stem) in &config.settlement_files {
        check_code(code)?;
        check_file_stem(code, stem)?;

        // Settlement accounts must be reachable through the category union,
        // otherwise a settlement-to-settlement transfer could never validate.
        if !accounts.contains_key(code) {
            return Err(LedgerError::config(format!(
                "settlement account '{}' has no name in any category table",
                code
            )));
        }
        let qif_type = config.account_types.get(code).copied().ok_or_else(|| {
            LedgerError::config(format!("settlement account '{}' has no QIF type", code))
        })?;

        settlements.insert(
            code.clone(),
            Settlement {
                file_name: format!("{}.qif", stem),
                qif_type,
            },
        );
    }

    warn_unused_types(&config.account_types, &config.settlement_files);
    Ok(settlements)
}

fn warn_unused_types(types: &BTreeMap<String, QifType>, files: &BTreeMap<String, String>) {
    for code in types.keys().filter(|code| !files.contains_key(*code)) {
        log::warn!("QIF type configured for '{}' which has no ledger file", code);
    }
}

fn check_code(code: &str) -> Result<(), LedgerError> {
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(LedgerError::config(format!(
            "account code '{}' must be lowercase letters",
            code
        )));
    }
    Ok(())
}

fn check_file_stem(code: &str, stem: &str) -> Result<(), LedgerError> {
    let bad = stem.is_empty()
        || stem == "."
        || stem == ".."
        || stem.contains(['/', '\\'])
        || stem.chars().any(char::is_control);
    if bad {
        return Err(LedgerError::config(format!(
            "ledger file name '{}' for '{}' is not a plain file name",
            stem, code
        )));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn default_chart() -> ChartOfAccounts {
    ChartOfAccounts::from_config(&ChartConfig::default()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_chart_builds() {
        let chart = default_chart();
        assert_eq!(
            chart.settlement_codes(),
            vec!["cash", "chequing", "mastercard", "payable", "receivable", "visa"]
        );
        assert_eq!(chart.len(), 29);
    }

    #[rstest]
    #[case::expense("gas", Some("Expenses:Auto:Gas"), true, false)]
    #[case::revenue("int", Some("Revenue:Interest"), false, false)]
    #[case::liability_settlement("visa", Some("Liabilities:Visa"), false, true)]
    #[case::asset_settlement("chequing", Some("Assets:Current:Chequing"), false, true)]
    #[case::asset_category("sav", Some("Assets:Current:Savings"), false, false)]
    #[case::unknown("xyz", None, false, false)]
    fn test_lookups(
        #[case] code: &str,
        #[case] name: Option<&str>,
        #[case] expense: bool,
        #[case] settlement: bool,
    ) {
        let chart = default_chart();
        assert_eq!(chart.account_name(code), name);
        assert_eq!(chart.contains(code), name.is_some());
        assert_eq!(chart.is_expense(code), expense);
        assert_eq!(chart.is_settlement(code), settlement);
    }

    #[test]
    fn test_settlement_file_and_type() {
        let chart = default_chart();
        let visa = chart.settlement("visa").unwrap();
        assert_eq!(visa.file_name, "visa.qif");
        assert_eq!(visa.qif_type, QifType::CCard);
        assert_eq!(chart.settlement("chequing").unwrap().qif_type, QifType::Bank);
    }

    #[test]
    fn test_duplicate_code_across_tables_rejected() {
        let mut config = ChartConfig::default();
        config
            .revenues
            .insert("gif".to_string(), "Revenue:Gifts".to_string());

        let result = ChartOfAccounts::from_config(&config);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("'gif' appears in both"));
    }

    #[test]
    fn test_settlement_without_name_rejected() {
        let mut config = ChartConfig::default();
        config
            .settlement_files
            .insert("amex".to_string(), "amex".to_string());
        config
            .account_types
            .insert("amex".to_string(), QifType::CCard);

        let err = ChartOfAccounts::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("no name"));
    }

    #[test]
    fn test_settlement_without_type_rejected() {
        let mut config = ChartConfig::default();
        config.account_types.remove("visa");

        let err = ChartOfAccounts::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("no QIF type"));
    }

    #[rstest]
    #[case::uppercase("Gas")]
    #[case::digits("g4s")]
    #[case::empty("")]
    fn test_bad_code_rejected(#[case] code: &str) {
        let mut config = ChartConfig::default();
        config
            .expenses
            .insert(code.to_string(), "Expenses:Bad".to_string());

        assert!(matches!(
            ChartOfAccounts::from_config(&config),
            Err(LedgerError::Config { .. })
        ));
    }

    #[rstest]
    #[case::traversal("../visa")]
    #[case::dotdot("..")]
    #[case::empty("")]
    fn test_bad_file_stem_rejected(#[case] stem: &str) {
        let mut config = ChartConfig::default();
        config
            .settlement_files
            .insert("visa".to_string(), stem.to_string());

        assert!(matches!(
            ChartOfAccounts::from_config(&config),
            Err(LedgerError::Config { .. })
        ));
    }
}
