//! Popup notification surface.
//!
//! Fire-and-forget dispatch into a UI overlay. The workflows only
//! build payloads and hand them off; rendering is the host's concern.

use serde::Serialize;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Popup notification payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Headline shown in the overlay
    pub title: String,
    /// Severity (selects the overlay icon)
    pub kind: NotificationKind,
    /// Optional body text under the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Notification {
    /// Create a success notification
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: NotificationKind::Success,
            text: None,
        }
    }

    /// Create an error notification
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: NotificationKind::Error,
            text: None,
        }
    }

    /// Attach body text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Notification surface trait.
///
/// Dispatch is synchronous and fire-and-forget: the workflow does not
/// wait for, or learn about, the overlay's fate.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that writes to the log instead of a UI overlay.
///
/// Useful in headless tests and development builds where no overlay
/// is mounted.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => tracing::info!(
                title = %notification.title,
                text = ?notification.text,
                "notification"
            ),
            NotificationKind::Error => tracing::warn!(
                title = %notification.title,
                text = ?notification.text,
                "notification"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_set_kind_and_text() {
        let n = Notification::success("Successfully Registered!");
        assert!(n.is_success());
        assert!(n.text.is_none());

        let n = Notification::error("Registration Failed").with_text("EMAIL_EXISTS");
        assert!(n.is_error());
        assert_eq!(n.text.as_deref(), Some("EMAIL_EXISTS"));
    }

    #[test]
    fn test_serializes_without_empty_text() {
        let n = Notification::success("Reset Link Sent!");
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["kind"], "success");
        assert!(json.get("text").is_none());
    }
}
