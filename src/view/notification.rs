//! Transient notifications
//!
//! Banners the tracker asks the view to show after an operation. Each one
//! carries its own display duration; the view decides how to dismiss it.

use std::time::{Duration, Instant};

use crate::error::TrackerError;

/// Default time a notification stays on screen
pub const DEFAULT_NOTIFICATION_SECS: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    /// Time when notification was created (for auto-dismiss)
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(DEFAULT_NOTIFICATION_SECS),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
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

    /// Budget overruns are warnings; everything else is an error banner
    pub fn from_error(err: &TrackerError) -> Self {
        match err {
            TrackerError::BudgetExceeded { .. } => Self::warning(err.to_string()),
            TrackerError::Validation(message) => Self::error(message.clone()),
            _ => Self::error(err.to_string()),
        }
    }

    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration = Duration::from_secs(seconds);
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    pub fn is_error(&self) -> bool {
        self.notification_type == NotificationType::Error
    }

    /// Get remaining time as a fraction (0.0 to 1.0)
    pub fn remaining_fraction(&self) -> f64 {
        let total = self.duration.as_secs_f64();
        if total <= 0.0 {
            return 0.0;
        }
        let elapsed = self.created_at.elapsed().as_secs_f64();
        (1.0 - elapsed / total).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_default_duration() {
        let n = Notification::success("Expense added");
        assert_eq!(n.duration, Duration::from_secs(4));
        assert!(!n.is_expired());
        assert!(n.remaining_fraction() > 0.9);
    }

    #[test]
    fn test_zero_duration_expires_immediately() {
        let n = Notification::info("gone").with_duration(0);
        assert!(n.is_expired());
        assert_eq!(n.remaining_fraction(), 0.0);
    }

    #[test]
    fn test_from_error_classifies() {
        let warning = Notification::from_error(&TrackerError::BudgetExceeded {
            attempted: Money::from_cents(5000),
            remaining: Money::from_cents(1000),
        });
        assert_eq!(warning.notification_type, NotificationType::Warning);
        assert!(warning.message.contains("$50.00"));

        let error = Notification::from_error(&TrackerError::Validation(
            "Fill in every field".into(),
        ));
        assert!(error.is_error());
        assert_eq!(error.message, "Fill in every field");
    }
}
