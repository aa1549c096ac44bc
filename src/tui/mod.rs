//! Terminal User Interface module
//!
//! An interactive view over one session: a deposit form, an expense form,
//! the current balance and the ledger, with toast notifications.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
