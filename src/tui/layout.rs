//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, forms column, ledger,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title line
    pub header: Rect,
    /// Left column with the balance and the two forms
    pub forms: Rect,
    /// Ledger table
    pub ledger: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(10),   // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(42), // Forms (fixed width)
                Constraint::Min(30),    // Ledger
            ])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            forms: horizontal[0],
            ledger: horizontal[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the forms column
pub struct FormsLayout {
    pub balance: Rect,
    pub deposit: Rect,
    pub expense: Rect,
    /// Per-category totals
    pub spending: Rect,
}

impl FormsLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Balance
                Constraint::Length(3), // Deposit form
                Constraint::Length(5), // Expense form
                Constraint::Min(3),    // Spending
            ])
            .split(area);

        Self {
            balance: chunks[0],
            deposit: chunks[1],
            expense: chunks[2],
            spending: chunks[3],
        }
    }
}

/// Area for a toast in the top-right corner
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + r.width.saturating_sub(width + 1);
    let y = r.y + 1.min(r.height.saturating_sub(height));
    Rect::new(x, y, width, height)
}
