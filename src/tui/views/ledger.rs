//! Ledger view
//!
//! Shows the logged expenses, oldest first.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::storage::LedgerStore;
use crate::tui::app::App;

/// Render the ledger table
pub fn render<S: LedgerStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let ledger = &app.session.state().ledger;
    let symbol = &app.settings.currency_symbol;

    let block = Block::default()
        .title(format!(" Expenses ({}) ", ledger.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if ledger.is_empty() {
        let text = Paragraph::new("No expenses yet. Deposit money, then log an expense.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(4),  // #
        Constraint::Min(12),    // Reason
        Constraint::Length(11), // Category
        Constraint::Length(14), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("#").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Reason").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = ledger
        .iter()
        .enumerate()
        .skip(app.ledger_offset)
        .map(|(i, expense)| {
            Row::new(vec![
                Cell::from(format!("{}", i + 1)).style(Style::default().fg(Color::DarkGray)),
                Cell::from(expense.reason.clone()),
                Cell::from(expense.category.to_string()).style(Style::default().fg(Color::Cyan)),
                Cell::from(format!(
                    "{:>12}",
                    expense.amount.format_with_symbol(symbol)
                ))
                .style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let total_line = format!(
        " Total spent: {} ",
        ledger.total().format_with_symbol(symbol)
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title_bottom(total_line));

    frame.render_widget(table, area);
}
