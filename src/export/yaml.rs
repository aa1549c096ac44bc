//! YAML Export functionality
//!
//! Human-readable ledger export.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Ledger;

/// Export the ledger to YAML
pub fn export_ledger_yaml<W: Write>(ledger: &Ledger, mut writer: W) -> ExpenseResult<()> {
    writeln!(writer, "# Expense ledger export ({} entries)", ledger.len())
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, ledger).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
