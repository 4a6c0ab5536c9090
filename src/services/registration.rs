//! Registration submission workflow.
//!
//! SOLID (SRP): Orchestrates one credential-based sign-up submission.
//! DDD: Validation lives in the domain layer; this service only
//! sequences it with the provider calls and the UI side effects.
//!
//! State machine per submission:
//! `Idle -> Validating -> (Rejected | Submitting) -> (Succeeded | Failed)`

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::config::{Config, MSG_REGISTERED_TITLE, MSG_REGISTRATION_FAILED_TITLE};
use crate::domain::{
    ProfileUpdate, RegistrationInput, RegistrationOutcome, RegistrationState, ValidationResult,
};
use crate::providers::{IdentityProvider, Navigator, Notification, Notifier};

/// Registration workflow trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Run one submission end to end.
    ///
    /// Total: every failure mode is folded into the returned outcome;
    /// rejections and provider errors are surfaced through the
    /// notification surface along the way.
    async fn register(&self, input: RegistrationInput) -> RegistrationOutcome;

    /// Current workflow state
    fn state(&self) -> RegistrationState;

    /// Subscribe to state transitions. The host UI should disable the
    /// submit control while the state is `Submitting`.
    fn watch_state(&self) -> watch::Receiver<RegistrationState>;

    /// True while a provider call is outstanding
    fn is_submitting(&self) -> bool;
}

/// Concrete registration workflow over injected collaborators.
pub struct RegistrationFlow {
    provider: Arc<dyn IdentityProvider>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    config: Config,
    state: watch::Sender<RegistrationState>,
}

impl RegistrationFlow {
    /// Create the workflow with explicitly injected collaborators
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        config: Config,
    ) -> Self {
        let (state, _) = watch::channel(RegistrationState::Idle);
        Self {
            provider,
            notifier,
            navigator,
            config,
            state,
        }
    }

    fn transition(&self, next: RegistrationState) {
        tracing::debug!(state = ?next, "registration state");
        self.state.send_replace(next);
    }
}

#[async_trait]
impl RegistrationService for RegistrationFlow {
    async fn register(&self, input: RegistrationInput) -> RegistrationOutcome {
        self.transition(RegistrationState::Validating);

        if let ValidationResult::Invalid(reason) = input.validate_credentials() {
            // Short-circuit: no network call is made on rejection.
            let mut notification = Notification::error(reason.title());
            if let Some(text) = reason.text() {
                notification = notification.with_text(text);
            }
            self.notifier.notify(notification);
            self.transition(RegistrationState::Rejected(reason));
            return RegistrationOutcome::Rejected(reason);
        }

        self.transition(RegistrationState::Submitting);

        match self
            .provider
            .create_account(&input.email, &input.password)
            .await
        {
            Ok(handle) => {
                // Registration is complete once the account exists;
                // the profile update is best-effort and its failure
                // is logged only.
                let profile = ProfileUpdate::new(input.username.clone(), input.photo_url.clone());
                if let Err(e) = self.provider.update_profile(&handle, profile).await {
                    tracing::error!(error = %e, uid = %handle.uid, "profile update failed after account creation");
                }

                self.notifier
                    .notify(Notification::success(MSG_REGISTERED_TITLE));
                self.navigator.navigate(&self.config.home_route);
                self.transition(RegistrationState::Succeeded);
                RegistrationOutcome::Succeeded(handle)
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(error = %message, "account creation rejected");
                self.notifier.notify(
                    Notification::error(MSG_REGISTRATION_FAILED_TITLE).with_text(message.clone()),
                );
                self.transition(RegistrationState::Failed(message.clone()));
                RegistrationOutcome::Failed(message)
            }
        }
    }

    fn state(&self) -> RegistrationState {
        self.state.borrow().clone()
    }

    fn watch_state(&self) -> watch::Receiver<RegistrationState> {
        self.state.subscribe()
    }

    fn is_submitting(&self) -> bool {
        matches!(*self.state.borrow(), RegistrationState::Submitting)
    }
}
