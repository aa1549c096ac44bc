//! JSON Export functionality
//!
//! Writes the ledger in the same record shape as `expenses.json`.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Ledger;

/// Export the ledger to pretty-printed JSON
pub fn export_ledger_json<W: Write>(ledger: &Ledger, mut writer: W) -> ExpenseResult<()> {
    serde_json::to_writer_pretty(&mut writer, ledger)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}
