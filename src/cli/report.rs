//! CLI command for the spending report

use crate::config::Settings;
use crate::display::format_spending_summary;
use crate::reports::SpendingSummary;
use crate::session::Session;
use crate::storage::LedgerStore;

/// Handle the report command
pub fn handle_report_command<S: LedgerStore>(session: &Session<S>, settings: &Settings) {
    let summary = SpendingSummary::generate(&session.state().ledger);

    println!("Spending by Category");
    println!("====================");
    print!(
        "{}",
        format_spending_summary(&summary, &settings.currency_symbol)
    );
}
