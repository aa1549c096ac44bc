//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session layer.

pub mod expense;
pub mod export;
pub mod report;

pub use expense::{handle_balance, handle_deposit, handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use report::handle_report_command;
