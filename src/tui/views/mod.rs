//! TUI Views module
//!
//! The forms column, the ledger table and the status bar, plus the toast
//! drawn on top of them.

pub mod forms;
pub mod ledger;
pub mod status_bar;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::storage::LedgerStore;

use super::app::App;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render<S: LedgerStore>(frame: &mut Frame, app: &App<'_, S>) {
    let layout = AppLayout::new(frame.area());

    let title = Paragraph::new(" Expense Manager")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(title, layout.header);

    forms::render(frame, app, layout.forms);
    ledger::render(frame, app, layout.ledger);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(48, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Category, Expense, Ledger, Money};
    use crate::session::Session;
    use crate::storage::MemoryStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_shows_balance_and_ledger() {
        let ledger = Ledger::from(vec![Expense::new(
            "lunch",
            Category::Food,
            Money::from_cents(4_000),
        )]);
        let store = MemoryStore::with_state(ledger, Money::from_cents(6_000));
        let (mut session, _) = Session::open(&store).unwrap();
        let settings = Settings::default();
        let app = App::new(&mut session, &settings);

        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("60.00"));
        assert!(text.contains("lunch"));
        assert!(text.contains("Food"));
    }

    #[test]
    fn test_render_empty_ledger_hint() {
        let store = MemoryStore::new();
        let (mut session, _) = Session::open(&store).unwrap();
        let settings = Settings::default();
        let app = App::new(&mut session, &settings);

        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        assert!(screen_text(&terminal).contains("No expenses yet"));
    }
}
