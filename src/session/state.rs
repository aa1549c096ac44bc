//! Application state
//!
//! Everything the interactive session knows: the ledger and the balance.

use crate::models::{Ledger, Money};
use crate::storage::Snapshot;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub ledger: Ledger,
    pub balance: Money,
}

impl AppState {
    pub fn new(ledger: Ledger, balance: Money) -> Self {
        Self { ledger, balance }
    }
}

impl From<Snapshot> for AppState {
    fn from(snapshot: Snapshot) -> Self {
        Self::new(snapshot.ledger, snapshot.balance)
    }
}
