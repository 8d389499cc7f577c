//! Status notifications
//!
//! Short-lived messages shown in the status line after an add, delete or
//! clear, or when the form rejects its input.

use std::time::{Duration, Instant};

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Error message
    Error,
}

impl NotificationType {
    /// Get the color for this notification type
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Error => "x",
        }
    }
}

/// A transient status message
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    /// Create a new notification with the default two-second lifetime
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Set the lifetime in whole seconds
    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration = Duration::from_secs(seconds);
        self
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Check expiry against an explicit clock reading
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Styled span for the status line
    pub fn span(&self) -> Span<'_> {
        Span::styled(
            format!(" [{}] {} ", self.notification_type.icon(), self.message),
            Style::default()
                .fg(self.notification_type.color())
                .add_modifier(Modifier::BOLD),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let note = Notification::success("Transaction added ✅").with_duration(2);
        let start = note.created_at;

        assert!(!note.is_expired_at(start + Duration::from_millis(1999)));
        assert!(note.is_expired_at(start + Duration::from_secs(2)));
    }

    #[test]
    fn test_zero_duration_expires_immediately() {
        let note = Notification::error("Enter valid amount").with_duration(0);
        assert!(note.is_expired());
    }

    #[test]
    fn test_span_carries_message() {
        let note = Notification::error("Please enter description");
        let span = note.span();
        assert!(span.content.contains("Please enter description"));
        assert_eq!(span.style.fg, Some(Color::Red));
    }
}
