//! Federated (Google) sign-in workflow.
//!
//! Independent two-state flow triggered by its own user action. There
//! is no local validation step: password policy does not apply to
//! federated accounts, and consent is handled entirely by the
//! provider's flow.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::config::{Config, MSG_GOOGLE_FAILED_TITLE, MSG_GOOGLE_SUCCESS_TITLE};
use crate::domain::UserHandle;
use crate::providers::{IdentityProvider, Navigator, Notification, Notifier};

/// States of the federated sign-in workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FederatedState {
    Idle,
    /// Consent flow outstanding
    Pending,
    Succeeded,
    Failed(String),
}

/// Terminal result of one federated sign-in attempt
#[derive(Debug, Clone, PartialEq)]
pub enum FederatedOutcome {
    Succeeded(UserHandle),
    /// Provider rejected the consent flow; message verbatim
    Failed(String),
}

/// Federated sign-in trait for dependency injection.
#[async_trait]
pub trait FederatedSignInService: Send + Sync {
    /// Run the provider's consent flow once
    async fn sign_in(&self) -> FederatedOutcome;

    /// Current workflow state
    fn state(&self) -> FederatedState;

    /// Subscribe to state transitions
    fn watch_state(&self) -> watch::Receiver<FederatedState>;
}

/// Concrete Google sign-in workflow over injected collaborators.
pub struct GoogleSignIn {
    provider: Arc<dyn IdentityProvider>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    config: Config,
    state: watch::Sender<FederatedState>,
}

impl GoogleSignIn {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        config: Config,
    ) -> Self {
        let (state, _) = watch::channel(FederatedState::Idle);
        Self {
            provider,
            notifier,
            navigator,
            config,
            state,
        }
    }

    fn transition(&self, next: FederatedState) {
        tracing::debug!(state = ?next, "federated sign-in state");
        self.state.send_replace(next);
    }
}

#[async_trait]
impl FederatedSignInService for GoogleSignIn {
    async fn sign_in(&self) -> FederatedOutcome {
        self.transition(FederatedState::Pending);

        match self.provider.sign_in_with_google().await {
            Ok(handle) => {
                self.notifier
                    .notify(Notification::success(MSG_GOOGLE_SUCCESS_TITLE));
                self.navigator.navigate(&self.config.home_route);
                self.transition(FederatedState::Succeeded);
                FederatedOutcome::Succeeded(handle)
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(error = %message, "federated sign-in rejected");
                self.notifier
                    .notify(Notification::error(MSG_GOOGLE_FAILED_TITLE).with_text(message.clone()));
                self.transition(FederatedState::Failed(message.clone()));
                FederatedOutcome::Failed(message)
            }
        }
    }

    fn state(&self) -> FederatedState {
        self.state.borrow().clone()
    }

    fn watch_state(&self) -> watch::Receiver<FederatedState> {
        self.state.subscribe()
    }
}
