//! Flat-file store
//!
//! `expenses.json` holds the ledger as a JSON list of records, `balance.txt`
//! holds the balance as plain decimal text. Both are overwritten after every
//! mutation; there is no cross-file atomicity.

use std::path::PathBuf;

use crate::config::paths::DataPaths;
use crate::error::ExpenseError;
use crate::models::{Ledger, Money};

use super::file_io::{read_text_if_exists, write_json_atomic, write_text_atomic};
use super::{LedgerStore, LoadWarning, Snapshot};

/// Store backed by the two flat files
#[derive(Debug, Clone)]
pub struct FileStore {
    expenses_path: PathBuf,
    balance_path: PathBuf,
}

impl FileStore {
    pub fn new(paths: &DataPaths) -> Self {
        Self {
            expenses_path: paths.expenses_file(),
            balance_path: paths.balance_file(),
        }
    }

    /// Create a store over explicit file paths
    pub fn with_files(expenses_path: PathBuf, balance_path: PathBuf) -> Self {
        Self {
            expenses_path,
            balance_path,
        }
    }

    pub fn expenses_path(&self) -> &PathBuf {
        &self.expenses_path
    }

    pub fn balance_path(&self) -> &PathBuf {
        &self.balance_path
    }
}

impl LedgerStore for FileStore {
    fn load(&self) -> Result<Snapshot, ExpenseError> {
        let mut warnings = Vec::new();

        let ledger = match read_text_if_exists(&self.expenses_path)? {
            None => Ledger::new(),
            Some(text) => parse_ledger(&text).unwrap_or_else(|reason| {
                warnings.push(LoadWarning::CorruptExpenses {
                    path: self.expenses_path.clone(),
                    reason,
                });
                Ledger::new()
            }),
        };

        let balance = match read_text_if_exists(&self.balance_path)? {
            None => Money::zero(),
            Some(text) => parse_balance(&text).unwrap_or_else(|reason| {
                warnings.push(LoadWarning::CorruptBalance {
                    path: self.balance_path.clone(),
                    reason,
                });
                Money::zero()
            }),
        };

        for warning in &warnings {
            tracing::info!(reason = warning.reason(), "{}", warning);
        }
        tracing::debug!(
            expenses = ledger.len(),
            balance = %balance,
            "loaded ledger from {}",
            self.expenses_path.display()
        );

        Ok(Snapshot {
            ledger,
            balance,
            warnings,
        })
    }

    fn save(&self, ledger: &Ledger, balance: Money) -> Result<(), ExpenseError> {
        write_json_atomic(&self.expenses_path, ledger)?;
        write_text_atomic(&self.balance_path, &balance.to_string())?;

        tracing::debug!(expenses = ledger.len(), balance = %balance, "saved ledger");
        Ok(())
    }
}

/// Parse the expense file contents; blank content is an empty ledger
fn parse_ledger(text: &str) -> Result<Ledger, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Ledger::new());
    }
    serde_json::from_str(text).map_err(|e| e.to_string())
}

/// Parse the balance file contents; blank content is zero
///
/// Plain decimals are read exactly. Other float forms such as `1e3` go
/// through `f64`.
fn parse_balance(text: &str) -> Result<Money, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Money::zero());
    }
    if let Ok(balance) = Money::parse(text) {
        return Ok(balance);
    }
    let value: f64 = text.parse().map_err(|e| format!("{}: '{}'", e, text))?;
    Money::from_f64(value).ok_or_else(|| format!("balance is not a finite number: '{}'", text))
}
