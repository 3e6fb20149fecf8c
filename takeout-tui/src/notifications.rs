//! Notification system for the TUI.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
    Success,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    /// Seconds since the notification was raised, for expiry checks.
    pub fn age_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_seconds()
    }
}
