//! Expense Manager - a persistent personal expense tracker
//!
//! This library provides the core functionality for the `expense` binary:
//! a running balance that deposits increase and logged expenses decrease,
//! with every change saved to two small files in the data directory.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, categories, expenses and the ledger
//! - `storage`: Loading and saving `expenses.json` and `balance.txt`
//! - `session`: Actions, the pure state transition and the persisting session
//! - `cli`: Non-interactive command handlers
//! - `tui`: The interactive terminal view
//! - `display`, `reports`, `export`: Formatting, summaries and exports
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_manager::config::DataPaths;
//! use expense_manager::session::{Action, Session};
//! use expense_manager::storage::FileStore;
//!
//! let paths = DataPaths::new()?;
//! let (mut session, _warnings) = Session::open(FileStore::new(&paths))?;
//! session.dispatch(Action::Deposit(Money::from_cents(10_000)))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod session;
pub mod storage;
pub mod tui;

pub use error::ExpenseError;
