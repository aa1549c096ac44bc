//! Report formatting utilities for terminal output

use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::reports::SpendingSummary;

#[derive(Tabled)]
struct SpendingRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "Spent")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format the spending summary as a table with a total row
pub fn format_spending_summary(summary: &SpendingSummary, currency_symbol: &str) -> String {
    if summary.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut rows: Vec<SpendingRow> = summary
        .categories
        .iter()
        .map(|c| SpendingRow {
            category: c.category.to_string(),
            count: c.count,
            total: c.total.format_with_symbol(currency_symbol),
            share: format_percentage(c.percentage),
            bar: format_bar(c.percentage, 100.0, 20),
        })
        .collect();

    rows.push(SpendingRow {
        category: "Total".to_string(),
        count: summary.expense_count,
        total: summary.total.format_with_symbol(currency_symbol),
        share: String::new(),
        bar: String::new(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()))
        .with(Modify::new(Rows::last()).with(Alignment::left()));

    format!("{}\n", table)
}
