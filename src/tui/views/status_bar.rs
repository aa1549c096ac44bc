//! Status bar view
//!
//! Shows the focused field and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::LedgerStore;
use crate::tui::app::{App, FormField};

/// Render the status bar
pub fn render<S: LedgerStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let field = match app.focused_field {
        FormField::DepositAmount => "Deposit",
        FormField::Reason => "Reason",
        FormField::Category => "Category",
        FormField::ExpenseAmount => "Expense amount",
    };

    let hints = if app.focused_field == FormField::Category {
        " ←/→:Category  Tab:Next  Enter:Log  Esc:Quit "
    } else {
        " Tab:Next  Enter:Submit  PgUp/PgDn:Scroll  Esc:Quit "
    };

    let left = format!(" {} ", field);

    let left_len = left.chars().count();
    let hints_len = hints.chars().count();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints_len);
    let padding = " ".repeat(padding_len.max(1));

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::raw(padding),
        Span::styled(hints, Style::default().fg(Color::White)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
