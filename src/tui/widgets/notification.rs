//! Toast notification widget
//!
//! Displays temporary notifications to the user, one at a time.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Warning,
    Error,
}

impl NotificationType {
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    /// When the notification became visible
    pub shown_at: Instant,
    /// How long it stays visible
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        let duration = match notification_type {
            NotificationType::Warning | NotificationType::Error => Duration::from_secs(5),
            NotificationType::Success => Duration::from_secs(3),
        };
        Self {
            message: message.into(),
            notification_type,
            shown_at: Instant::now(),
            duration,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.notification_type.color();
        let icon = self.notification.notification_type.icon();
        let title = self.notification.notification_type.title();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", icon, title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let paragraph = Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block);

        paragraph.render(area, buf);
    }
}

/// A queue of notifications, shown front first
///
/// Only the front notification's clock runs; the next one starts its own
/// clock when it reaches the front.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut notification: Notification) {
        if self.notifications.is_empty() {
            notification.shown_at = Instant::now();
        }
        self.notifications.push(notification);
    }

    /// Replace whatever is showing with a new notification
    pub fn replace(&mut self, notification: Notification) {
        self.notifications.retain(|n| n.notification_type == NotificationType::Warning);
        self.notifications.insert(0, notification);
        if let Some(front) = self.notifications.first_mut() {
            front.shown_at = Instant::now();
        }
    }

    /// Drop the front notification once it has expired
    pub fn remove_expired(&mut self) {
        while self.notifications.first().is_some_and(|n| n.is_expired()) {
            self.notifications.remove(0);
            if let Some(next) = self.notifications.first_mut() {
                next.shown_at = Instant::now();
            }
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::success("Test message");
        assert_eq!(n.message, "Test message");
        assert_eq!(n.notification_type, NotificationType::Success);
        assert_eq!(n.duration, Duration::from_secs(3));
        assert_eq!(Notification::error("x").duration, Duration::from_secs(5));
    }

    #[test]
    fn test_notification_types() {
        assert_eq!(NotificationType::Success.color(), Color::Green);
        assert_eq!(NotificationType::Warning.color(), Color::Yellow);
        assert_eq!(NotificationType::Error.color(), Color::Red);
    }

    #[test]
    fn test_queue_shows_one_at_a_time() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::warning("First").with_duration(Duration::ZERO));
        queue.push(Notification::warning("Second"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "First");

        queue.remove_expired();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().message, "Second");
        assert!(!queue.current().unwrap().is_expired());
    }

    #[test]
    fn test_replace_keeps_pending_warnings() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::warning("Corrupt file"));
        queue.push(Notification::success("Saved"));

        queue.replace(Notification::error("Not enough balance!"));

        assert_eq!(queue.current().unwrap().message, "Not enough balance!");
        assert_eq!(queue.len(), 2);
    }
}
