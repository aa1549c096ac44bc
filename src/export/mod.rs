//! Export module for the expense manager
//!
//! Writes the ledger in multiple formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: the `expenses.json` record shape
//! - YAML: human-readable records

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_ledger_csv;
pub use self::json::export_ledger_json;
pub use self::yaml::export_ledger_yaml;
