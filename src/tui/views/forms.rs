//! Forms column
//!
//! Balance panel, deposit form, expense form and a per-category summary.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::report::{format_bar, format_percentage};
use crate::reports::SpendingSummary;
use crate::storage::LedgerStore;
use crate::tui::app::{App, FormField};
use crate::tui::layout::FormsLayout;

/// Render the forms column
pub fn render<S: LedgerStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let layout = FormsLayout::new(area);

    render_balance(frame, app, layout.balance);
    render_deposit_form(frame, app, layout.deposit);
    render_expense_form(frame, app, layout.expense);
    render_spending(frame, app, layout.spending);
}

fn form_block(title: &str, focused: bool) -> Block<'_> {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

fn render_balance<S: LedgerStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let balance = app.session.state().balance;
    let color = if balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let line = Line::from(vec![
        Span::styled("Current Balance: ", Style::default().fg(Color::White)),
        Span::styled(
            balance.format_with_symbol(&app.settings.currency_symbol),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(form_block(" Balance ", false));
    frame.render_widget(paragraph, area);
}

fn render_deposit_form<S: LedgerStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let focused = app.focused_field == FormField::DepositAmount;
    let block = form_block(" Deposit Money ", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(app.deposit_input.clone().focused(focused), inner);
}

fn render_expense_form<S: LedgerStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let focused = app.focused_field.is_expense_field();
    let block = form_block(" Log Expense ", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        app.reason_input
            .clone()
            .focused(app.focused_field == FormField::Reason),
        rows[0],
    );

    let category_style = if app.focused_field == FormField::Category {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let category_line = Line::from(vec![
        Span::styled("Category", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(format!("< {} >", app.category), category_style),
    ]);
    frame.render_widget(Paragraph::new(category_line), rows[1]);

    frame.render_widget(
        app.amount_input
            .clone()
            .focused(app.focused_field == FormField::ExpenseAmount),
        rows[2],
    );
}

fn render_spending<S: LedgerStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let block = form_block(" Spending ", false);
    let summary = SpendingSummary::generate(&app.session.state().ledger);

    if summary.is_empty() {
        let text = Paragraph::new("Nothing spent yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let lines: Vec<Line> = summary
        .categories
        .iter()
        .map(|c| {
            Line::from(vec![
                Span::styled(format!("{:<10}", c.category.name()), Style::default().fg(Color::White)),
                Span::styled(format_bar(c.percentage, 100.0, 10), Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {:>6}", format_percentage(c.percentage))),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
