//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger, balance and reports as
//! plain-text tables.

pub mod ledger;
pub mod report;

pub use ledger::{format_balance, format_ledger_table, format_overview};
pub use report::format_spending_summary;
