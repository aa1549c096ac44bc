//! CLI command for ledger export

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_ledger_csv, export_ledger_json, export_ledger_yaml};
use crate::models::Ledger;
use crate::session::Session;
use crate::storage::LedgerStore;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV rows (Reason, Category, Amount)
    Csv,
    /// JSON list in the expenses.json shape
    Json,
    /// YAML list, human-readable
    Yaml,
}

/// Write the ledger in the chosen format
pub fn write_export<W: Write>(ledger: &Ledger, format: ExportFormat, writer: W) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_ledger_csv(ledger, writer),
        ExportFormat::Json => export_ledger_json(ledger, writer),
        ExportFormat::Yaml => export_ledger_yaml(ledger, writer),
    }
}

/// Handle the export command
pub fn handle_export_command<S: LedgerStore>(
    session: &Session<S>,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    let ledger = &session.state().ledger;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(ledger, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;

            eprintln!(
                "Exported {} expense(s) to {}",
                ledger.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            write_export(ledger, format, stdout.lock())?;
        }
    }

    Ok(())
}
