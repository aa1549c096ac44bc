//! Reports module for the expense manager
//!
//! Provides spending analysis over the ledger.

pub mod spending;

pub use spending::{CategorySpending, SpendingSummary};
