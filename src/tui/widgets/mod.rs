//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod input;
pub mod notification;

pub use input::TextInput;
pub use notification::{Notification, NotificationQueue, NotificationType, NotificationWidget};
