//! Settings loaded once at startup
//!
//! Settings are read from a TOML file. Every field has a default, so an empty
//! file (or no file at all) yields the built-in chart of accounts writing to
//! `./output`. Each chart table that is present in the file replaces the
//! corresponding built-in table as a whole. Unknown keys are rejected, so a
//! misspelled table name fails at startup instead of falling back to defaults.

use crate::types::{LedgerError, QifType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Root for `transactions/`, `logs/` and the notes file
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub chart: ChartConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            chart: ChartConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Config` if the file cannot be read or is not
    /// valid TOML for this structure.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, LedgerError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, LedgerError> {
        toml::to_string_pretty(self).map_err(|e| LedgerError::config(e.to_string()))
    }

    /// Write these settings to `path`, refusing to overwrite an existing file
    pub fn write_new(&self, path: &Path) -> Result<(), LedgerError> {
        if path.exists() {
            return Err(LedgerError::config(format!(
                "'{}' already exists",
                path.display()
            )));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| LedgerError::io_at(parent, e))?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| LedgerError::io_at(path, e))?;
        Ok(())
    }
}

/// Chart of accounts tables as configured
///
/// Keys are account codes. `settlement_files` maps a settlement code to the
/// stem of its ledger file (`visa` -> `transactions/visa.qif`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub assets: BTreeMap<String, String>,
    pub liabilities: BTreeMap<String, String>,
    pub revenues: BTreeMap<String, String>,
    pub expenses: BTreeMap<String, String>,
    pub settlement_files: BTreeMap<String, String>,
    pub account_types: BTreeMap<String, QifType>,
}

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            assets: table(&[
                ("cash", "Assets:Current:Cash"),
                ("chequing", "Assets:Current:Chequing"),
                ("receivable", "Assets:Current:Receivable"),
                ("sav", "Assets:Current:Savings"),
            ]),
            liabilities: table(&[
                ("mastercard", "Liabilities:Mastercard"),
                ("payable", "Liabilities:Payable"),
                ("visa", "Liabilities:Visa"),
            ]),
            revenues: table(&[
                ("ear", "Revenue:Earnings"),
                ("rgi", "Revenue:Gifts"),
                ("int", "Revenue:Interest"),
                ("rmi", "Revenue:Miscellaneous"),
                ("por", "Revenue:Portfolio"),
            ]),
            expenses: table(&[
                ("gas", "Expenses:Auto:Gas"),
                ("ins", "Expenses:Auto:Insurance"),
                ("mai", "Expenses:Auto:Maintenance & Fees"),
                ("clo", "Expenses:Commodities:Clothing"),
                ("com", "Expenses:Commodities:Computer"),
                ("woe", "Expenses:Commodities:Workout Equipment"),
                ("din", "Expenses:Entertainment:Dining"),
                ("gam", "Expenses:Entertainment:Games"),
                ("ent", "Expenses:Entertainment:General"),
                ("out", "Expenses:Entertainment:Outings"),
                ("mis", "Expenses:Miscellaneous:General"),
                ("gif", "Expenses:Miscellaneous:Gifts"),
                ("los", "Expenses:Miscellaneous:Loss"),
                ("eye", "Expenses:Upkeep:Eyewear"),
                ("nut", "Expenses:Upkeep:Nutrition"),
                ("sup", "Expenses:Upkeep:Supplies"),
                ("pho", "Expenses:Utilities:Phone"),
            ]),
            settlement_files: table(&[
                ("cash", "cash"),
                ("chequing", "chequing"),
                ("mastercard", "mastercard"),
                ("payable", "payable"),
                ("receivable", "receivable"),
                ("visa", "visa"),
            ]),
            account_types: [
                ("cash", QifType::Cash),
                ("chequing", QifType::Bank),
                ("mastercard", QifType::CCard),
                ("payable", QifType::CCard),
                ("receivable", QifType::Bank),
                ("visa", QifType::CCard),
            ]
            .into_iter()
            .map(|(code, qif_type)| (code.to_string(), qif_type))
            .collect(),
        }
    }
}
