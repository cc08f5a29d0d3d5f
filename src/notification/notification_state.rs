use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::theme;

/// Notification type - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Info - short-lived confirmations ("Channel purpose updated")
    #[default]
    Info,
    /// Warning - longer-lived ("license expires soon", bad config)
    Warning,
}

impl NotificationType {
    fn duration(self) -> Duration {
        match self {
            NotificationType::Info => Duration::from_secs(2),
            NotificationType::Warning => Duration::from_secs(8),
        }
    }

    fn style(self) -> NotificationStyle {
        match self {
            NotificationType::Info => NotificationStyle {
                fg: theme::notification::INFO_FG,
                bg: theme::notification::INFO_BG,
                border: theme::notification::INFO_BORDER,
            },
            NotificationType::Warning => NotificationStyle {
                fg: theme::notification::WARNING_FG,
                bg: theme::notification::WARNING_BG,
                border: theme::notification::WARNING_BG,
            },
        }
    }
}

/// Style configuration for a notification
#[derive(Debug, Clone)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// A single notification with message, timing, and style
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn with_type(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            style: notification_type.style(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Notification state manager for the application
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an info notification
    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Info));
    }

    /// Show a warning notification
    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Warning));
    }

    /// Clear an expired notification, returns true if one was cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(notification) = &self.current
            && notification.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_notification() {
        let notification = Notification::with_type("Saved", NotificationType::Info);
        assert_eq!(notification.message, "Saved");
        assert_eq!(notification.notification_type, NotificationType::Info);
        assert_eq!(notification.duration, Duration::from_secs(2));
        assert!(!notification.is_expired());
    }

    #[test]
    fn test_warning_notification_lives_longer() {
        let info = Notification::with_type("a", NotificationType::Info);
        let warning = Notification::with_type("b", NotificationType::Warning);
        assert!(warning.duration > info.duration);
    }

    #[test]
    fn test_show_replaces_current() {
        let mut state = NotificationState::new();
        state.show("first");
        state.show_warning("second");
        assert_eq!(state.current().unwrap().message, "second");
        assert_eq!(
            state.current().unwrap().notification_type,
            NotificationType::Warning
        );
    }

    #[test]
    fn test_clear_if_expired_keeps_fresh_notification() {
        let mut state = NotificationState::new();
        state.show("fresh");
        assert!(!state.clear_if_expired());
        assert!(state.current().is_some());
    }

    #[test]
    fn test_clear_if_expired_removes_old_notification() {
        let mut state = NotificationState::new();
        state.show("old");
        // Backdate the notification past its lifetime
        if let Some(n) = &mut state.current {
            n.created_at = Instant::now() - Duration::from_secs(60);
        }
        assert!(state.clear_if_expired());
        assert!(state.current().is_none());
    }

    #[test]
    fn test_clear_if_expired_with_no_notification() {
        let mut state = NotificationState::new();
        assert!(!state.clear_if_expired());
    }
}
