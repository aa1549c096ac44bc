//! Ledger display formatting
//!
//! Renders the ledger and the balance for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Ledger, Money};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Reason")]
    reason: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the ledger as a table, in entry order
pub fn format_ledger_table(ledger: &Ledger, currency_symbol: &str) -> String {
    if ledger.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = ledger.iter().enumerate().map(|(i, expense)| ExpenseRow {
        index: i + 1,
        reason: expense.reason.clone(),
        category: expense.category.to_string(),
        amount: expense.amount.format_with_symbol(currency_symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    format!(
        "{}\nTotal spent: {}\n",
        table,
        ledger.total().format_with_symbol(currency_symbol)
    )
}

/// Format the current balance line
pub fn format_balance(balance: Money, currency_symbol: &str) -> String {
    format!("Current balance: {}\n", balance.format_with_symbol(currency_symbol))
}

/// Balance followed by the ledger table
pub fn format_overview(ledger: &Ledger, balance: Money, currency_symbol: &str) -> String {
    let mut output = format_balance(balance, currency_symbol);
    output.push('\n');
    output.push_str(&format_ledger_table(ledger, currency_symbol));
    output
}
