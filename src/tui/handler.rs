//! Event handler for the TUI
//!
//! Routes keyboard events to the focused form field.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::ExpenseError;
use crate::storage::LedgerStore;

use super::app::{App, FormField};
use super::event::Event;

/// Rows moved per PageUp/PageDown
const SCROLL_STEP: usize = 5;

/// Handle an incoming event
pub fn handle_event<S: LedgerStore>(app: &mut App<'_, S>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
        Event::Failed(reason) => {
            Err(ExpenseError::Tui(format!("terminal input failed: {}", reason)).into())
        }
    }
}

/// Handle a key event
fn handle_key_event<S: LedgerStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    // Global keys
    match key.code {
        KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('c') | KeyCode::Char('q')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.quit();
            return Ok(());
        }
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
            return Ok(());
        }
        KeyCode::PageUp => {
            app.scroll_up(SCROLL_STEP);
            return Ok(());
        }
        KeyCode::PageDown => {
            app.scroll_down(SCROLL_STEP);
            return Ok(());
        }
        KeyCode::Enter => {
            if app.focused_field.is_expense_field() {
                app.submit_expense();
            } else {
                app.submit_deposit();
            }
            return Ok(());
        }
        _ => {}
    }

    if app.focused_field == FormField::Category {
        match key.code {
            KeyCode::Left => app.prev_category(),
            KeyCode::Right | KeyCode::Char(' ') => app.next_category(),
            _ => {}
        }
        return Ok(());
    }

    if let Some(input) = app.focused_input_mut() {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.insert(c)
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
    }

    Ok(())
}
