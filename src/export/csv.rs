//! CSV Export functionality
//!
//! Exports the ledger as `Reason,Category,Amount` rows with two-decimal amounts.

use serde::Serialize;
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Ledger;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Reason")]
    reason: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

/// Export the ledger to CSV
pub fn export_ledger_csv<W: Write>(ledger: &Ledger, writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if ledger.is_empty() {
        csv_writer
            .write_record(["Reason", "Category", "Amount"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    for expense in ledger {
        csv_writer
            .serialize(CsvRow {
                reason: &expense.reason,
                category: expense.category.name(),
                amount: expense.amount.to_string(),
            })
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
