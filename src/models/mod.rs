//! Core data models for the expense manager
//!
//! Money amounts, expense categories, expense records and the ledger that
//! holds them.

pub mod category;
pub mod expense;
pub mod ledger;
pub mod money;

pub use category::Category;
pub use expense::Expense;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
