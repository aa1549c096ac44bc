//! In-memory store
//!
//! Keeps the last saved ledger and balance in process memory.

use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::{Ledger, Money};

use super::{LedgerStore, Snapshot};

/// Store that never touches the file system
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<(Ledger, Money)>,
    saves: RwLock<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a ledger and balance
    pub fn with_state(ledger: Ledger, balance: Money) -> Self {
        Self {
            data: RwLock::new((ledger, balance)),
            saves: RwLock::new(0),
        }
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> Result<usize, ExpenseError> {
        let saves = self.saves.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(*saves)
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Snapshot, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(Snapshot {
            ledger: data.0.clone(),
            balance: data.1,
            warnings: Vec::new(),
        })
    }

    fn save(&self, ledger: &Ledger, balance: Money) -> Result<(), ExpenseError> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = (ledger.clone(), balance);

        let mut saves = self.saves.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *saves += 1;

        Ok(())
    }
}
