//! Service Container - Centralized workflow access.
//!
//! SOLID (SRP): Manages workflow lifecycle and access.
//! SOLID (DIP): Depends on workflow traits, not implementations.

use std::sync::Arc;

use super::{
    FederatedSignInService, GoogleSignIn, PasswordResetService, RegistrationFlow,
    RegistrationService, ResetRequester,
};
use crate::config::Config;
use crate::providers::{IdentityProvider, Navigator, Notifier};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to the three workflows.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get the registration submission workflow
    fn registration(&self) -> Arc<dyn RegistrationService>;

    /// Get the federated sign-in workflow
    fn federated(&self) -> Arc<dyn FederatedSignInService>;

    /// Get the password reset workflow
    fn password_reset(&self) -> Arc<dyn PasswordResetService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    registration: Arc<dyn RegistrationService>,
    federated: Arc<dyn FederatedSignInService>,
    password_reset: Arc<dyn PasswordResetService>,
}

impl Services {
    /// Create a new service container with manually injected workflows
    pub fn new(
        registration: Arc<dyn RegistrationService>,
        federated: Arc<dyn FederatedSignInService>,
        password_reset: Arc<dyn PasswordResetService>,
    ) -> Self {
        Self {
            registration,
            federated,
            password_reset,
        }
    }

    /// Wire all three workflows over shared collaborators.
    ///
    /// This is the recommended way to build the container: one
    /// provider, notifier and navigator serve every workflow.
    pub fn with_providers(
        provider: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        config: Config,
    ) -> Self {
        let registration = Arc::new(RegistrationFlow::new(
            provider.clone(),
            notifier.clone(),
            navigator.clone(),
            config.clone(),
        ));
        let federated = Arc::new(GoogleSignIn::new(
            provider.clone(),
            notifier.clone(),
            navigator,
            config,
        ));
        let password_reset = Arc::new(ResetRequester::new(provider, notifier));

        Self {
            registration,
            federated,
            password_reset,
        }
    }
}

impl ServiceContainer for Services {
    fn registration(&self) -> Arc<dyn RegistrationService> {
        self.registration.clone()
    }

    fn federated(&self) -> Arc<dyn FederatedSignInService> {
        self.federated.clone()
    }

    fn password_reset(&self) -> Arc<dyn PasswordResetService> {
        self.password_reset.clone()
    }
}
