//! Toast notification records
//!
//! Plain data describing one toast; the reactive queue lives in
//! `ui::notifications`.

use serde::{Deserialize, Serialize};

use super::backend::AuthError;

/// Notification severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    Success,
    Error,
    Warning,
    Info,
}

/// Notification shown as a toast
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Success,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(3000),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Error,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: None, // Errors should be manually dismissed
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Warning,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(5000),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Info,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(3000),
        }
    }

    /// Toast for a rejected auth operation
    ///
    /// Already-paid is not a failure from the user's point of view.
    pub fn from_auth_error(title: impl Into<String>, err: &AuthError) -> Self {
        match err {
            AuthError::AlreadyPaid => Self::info(title, err.to_string()),
            _ => Self::error(title, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_type_and_dismiss() {
        let success = Notification::success("Saved", "All good");
        assert_eq!(success.notification_type, NotificationType::Success);
        assert_eq!(success.auto_dismiss_ms, Some(3000));

        let error = Notification::error("Failed", "Broken");
        assert_eq!(error.notification_type, NotificationType::Error);
        assert!(error.auto_dismiss_ms.is_none());

        let warning = Notification::warning("Careful", "Hmm");
        assert_eq!(warning.auto_dismiss_ms, Some(5000));
    }

    #[test]
    fn test_from_auth_error() {
        let err = Notification::from_auth_error("Upgrade failed", &AuthError::NotAuthenticated);
        assert_eq!(err.notification_type, NotificationType::Error);
        assert_eq!(err.message, "Not signed in");

        let info = Notification::from_auth_error("Upgrade", &AuthError::AlreadyPaid);
        assert_eq!(info.notification_type, NotificationType::Info);
    }
}
