//! Application services layer - The three user-triggered workflows.
//!
//! Each workflow is a trait + concrete implementation pair so the host
//! UI depends on abstractions and tests can substitute doubles. All
//! collaborators arrive by constructor injection.

pub mod container;
mod federated;
mod registration;
mod reset;

// Service Container
pub use container::{ServiceContainer, Services};

// Workflow traits and implementations
pub use federated::{FederatedOutcome, FederatedSignInService, FederatedState, GoogleSignIn};
pub use registration::{RegistrationFlow, RegistrationService};
pub use reset::{PasswordResetService, ResetOutcome, ResetRequester};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
