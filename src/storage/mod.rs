//! Storage layer for the expense manager
//!
//! The ledger and the balance are two serialized values behind the
//! [`LedgerStore`] interface, so the medium can change without touching the
//! action logic. [`FileStore`] keeps them in `expenses.json` and `balance.txt`;
//! [`MemoryStore`] keeps them in process memory.

pub mod file_io;
pub mod files;
pub mod memory;

pub use file_io::{read_text_if_exists, write_json_atomic, write_text_atomic};
pub use files::FileStore;
pub use memory::MemoryStore;

use std::fmt;
use std::path::PathBuf;

use crate::error::ExpenseError;
use crate::models::{Ledger, Money};

/// Persisted ledger and balance, plus anything that had to be reset on load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub ledger: Ledger,
    pub balance: Money,
    pub warnings: Vec<LoadWarning>,
}

/// Non-fatal problem found while loading; the affected value was reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The expense list could not be parsed and was reset to empty
    CorruptExpenses { path: PathBuf, reason: String },
    /// The balance could not be parsed and was reset to zero
    CorruptBalance { path: PathBuf, reason: String },
}

impl LoadWarning {
    /// Underlying parse failure, for logs
    pub fn reason(&self) -> &str {
        match self {
            Self::CorruptExpenses { reason, .. } | Self::CorruptBalance { reason, .. } => reason,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CorruptExpenses { path, .. } => write!(
                f,
                "'{}' was corrupted or empty. Starting fresh.",
                file_label(path)
            ),
            Self::CorruptBalance { path, .. } => write!(
                f,
                "'{}' was corrupted or empty. Resetting balance.",
                file_label(path)
            ),
        }
    }
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Where the ledger and balance live between runs
pub trait LedgerStore {
    /// Load the persisted state, resetting corrupt values instead of failing
    fn load(&self) -> Result<Snapshot, ExpenseError>;

    /// Overwrite the persisted state with the given ledger and balance
    fn save(&self, ledger: &Ledger, balance: Money) -> Result<(), ExpenseError>;
}

impl<S: LedgerStore + ?Sized> LedgerStore for &S {
    fn load(&self) -> Result<Snapshot, ExpenseError> {
        (**self).load()
    }

    fn save(&self, ledger: &Ledger, balance: Money) -> Result<(), ExpenseError> {
        (**self).save(ledger, balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_messages_name_the_file() {
        let expenses = LoadWarning::CorruptExpenses {
            path: PathBuf::from("/tmp/data/expenses.json"),
            reason: "expected value".into(),
        };
        assert_eq!(
            expenses.to_string(),
            "'expenses.json' was corrupted or empty. Starting fresh."
        );
        assert_eq!(expenses.reason(), "expected value");

        let balance = LoadWarning::CorruptBalance {
            path: PathBuf::from("balance.txt"),
            reason: "invalid float literal".into(),
        };
        assert_eq!(
            balance.to_string(),
            "'balance.txt' was corrupted or empty. Resetting balance."
        );
    }
}
