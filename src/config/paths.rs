//! Path management for the expense manager
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` command line flag (if given)
//! 2. `EXPENSE_MANAGER_DATA_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::PathBuf;

use crate::error::ExpenseError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_MANAGER_DATA_DIR";

/// Manages all paths used by the expense manager
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Directory holding the ledger and balance files
    base_dir: PathBuf,
}

impl DataPaths {
    /// Resolve paths from the environment, falling back to the working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                ExpenseError::Config(format!("Could not determine working directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create DataPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Get the path to balance.txt
    pub fn balance_file(&self) -> PathBuf {
        self.base_dir.join("balance.txt")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("expense-manager.log")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))
    }
}
