//! Password reset request workflow.
//!
//! Triggered by an explicit user action, independent of the sign-up
//! flows: it never touches registration state and never navigates.
//! The host UI prompts for the email and passes it here.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{MSG_RESET_FAILED_TITLE, MSG_RESET_SENT_TEXT, MSG_RESET_SENT_TITLE};
use crate::providers::{IdentityProvider, Notification, Notifier};

/// Terminal result of one reset request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Provider accepted the request; confirmation shown
    Sent,
    /// Empty prompt input; nothing dispatched
    Skipped,
    /// Provider rejected the request; message verbatim
    Failed(String),
}

/// Password reset trait for dependency injection.
#[async_trait]
pub trait PasswordResetService: Send + Sync {
    /// Request a reset link for the prompted email address.
    ///
    /// Empty or whitespace-only input is a no-op.
    async fn request_reset(&self, email: &str) -> ResetOutcome;
}

/// Concrete reset-request workflow over injected collaborators.
pub struct ResetRequester {
    provider: Arc<dyn IdentityProvider>,
    notifier: Arc<dyn Notifier>,
}

impl ResetRequester {
    pub fn new(provider: Arc<dyn IdentityProvider>, notifier: Arc<dyn Notifier>) -> Self {
        Self { provider, notifier }
    }
}

#[async_trait]
impl PasswordResetService for ResetRequester {
    async fn request_reset(&self, email: &str) -> ResetOutcome {
        let email = email.trim();
        if email.is_empty() {
            tracing::debug!("reset prompt dismissed without an email");
            return ResetOutcome::Skipped;
        }

        match self.provider.send_password_reset(email).await {
            Ok(()) => {
                self.notifier.notify(
                    Notification::success(MSG_RESET_SENT_TITLE).with_text(MSG_RESET_SENT_TEXT),
                );
                ResetOutcome::Sent
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(error = %message, "password reset request rejected");
                self.notifier
                    .notify(Notification::error(MSG_RESET_FAILED_TITLE).with_text(message.clone()));
                ResetOutcome::Failed(message)
            }
        }
    }
}
