//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::Settings;
use crate::error::ExpenseError;
use crate::models::Category;
use crate::session::input::parse_amount;
use crate::session::{Action, Effect, NewExpense, Session};
use crate::storage::{LedgerStore, LoadWarning};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Which form field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    DepositAmount,
    Reason,
    Category,
    ExpenseAmount,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::DepositAmount => Self::Reason,
            Self::Reason => Self::Category,
            Self::Category => Self::ExpenseAmount,
            Self::ExpenseAmount => Self::DepositAmount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::DepositAmount => Self::ExpenseAmount,
            Self::Reason => Self::DepositAmount,
            Self::Category => Self::Reason,
            Self::ExpenseAmount => Self::Category,
        }
    }

    /// Whether the field belongs to the expense form
    pub fn is_expense_field(self) -> bool {
        !matches!(self, Self::DepositAmount)
    }
}

/// Main application state
pub struct App<'a, S: LedgerStore> {
    /// The session every action goes through
    pub session: &'a mut Session<S>,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Focused form field
    pub focused_field: FormField,

    pub deposit_input: TextInput,
    pub reason_input: TextInput,
    pub amount_input: TextInput,

    /// Category selected in the expense form
    pub category: Category,

    /// First ledger row shown
    pub ledger_offset: usize,

    /// Toasts waiting to be shown
    pub notifications: NotificationQueue,
}

impl<'a, S: LedgerStore> App<'a, S> {
    /// Create a new App instance
    pub fn new(session: &'a mut Session<S>, settings: &'a Settings) -> Self {
        Self {
            session,
            settings,
            should_quit: false,
            focused_field: FormField::default(),
            deposit_input: TextInput::new()
                .label("Amount")
                .placeholder("e.g. 100"),
            reason_input: TextInput::new()
                .label("Reason")
                .placeholder("e.g. lunch"),
            amount_input: TextInput::new()
                .label("Amount")
                .placeholder("e.g. 40.50"),
            category: Category::default(),
            ledger_offset: 0,
            notifications: NotificationQueue::new(),
        }
    }

    /// Queue load warnings so they show before anything else
    pub fn with_warnings(mut self, warnings: &[LoadWarning]) -> Self {
        for warning in warnings {
            self.notifications.push(Notification::warning(warning.to_string()));
        }
        self
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus_next(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The text input under focus, if the focused field is one
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::DepositAmount => Some(&mut self.deposit_input),
            FormField::Reason => Some(&mut self.reason_input),
            FormField::ExpenseAmount => Some(&mut self.amount_input),
            FormField::Category => None,
        }
    }

    pub fn next_category(&mut self) {
        self.category = self.category.next();
    }

    pub fn prev_category(&mut self) {
        self.category = self.category.prev();
    }

    /// Submit the deposit form
    pub fn submit_deposit(&mut self) {
        let amount = match parse_amount(self.deposit_input.value()) {
            Ok(amount) => amount,
            Err(e) => {
                self.notify_error(&e);
                return;
            }
        };

        if self.dispatch(Action::Deposit(amount)) {
            self.deposit_input.clear();
        }
    }

    /// Submit the expense form
    pub fn submit_expense(&mut self) {
        let amount = match parse_amount(self.amount_input.value()) {
            Ok(amount) => amount,
            Err(e) => {
                self.notify_error(&e);
                return;
            }
        };

        let expense = NewExpense::new(self.reason_input.value().trim(), self.category, amount);
        if self.dispatch(Action::LogExpense(expense)) {
            self.reason_input.clear();
            self.amount_input.clear();
        }
    }

    /// Run an action through the session; true if it was committed
    fn dispatch(&mut self, action: Action) -> bool {
        match self.session.dispatch(action) {
            Ok(effect) => {
                let message = effect.message(&self.settings.currency_symbol);
                match effect {
                    Effect::Rejected(_) => {
                        self.notifications.replace(Notification::error(message));
                        false
                    }
                    _ => {
                        self.notifications.replace(Notification::success(message));
                        true
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save");
                self.notify_error(&e);
                false
            }
        }
    }

    fn notify_error(&mut self, error: &ExpenseError) {
        self.notifications
            .replace(Notification::error(error.to_string()));
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.ledger_offset = self.ledger_offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let last = self.session.state().ledger.len().saturating_sub(1);
        self.ledger_offset = (self.ledger_offset + rows).min(last);
    }
}
