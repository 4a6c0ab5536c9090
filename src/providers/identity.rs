//! Identity provider interface.
//!
//! SOLID (DIP): The workflows depend on this trait, not on any SDK.
//! The four operations are injected at construction so tests can
//! substitute a double; there is no ambient/global provider context.

use async_trait::async_trait;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::domain::{ProfileUpdate, UserHandle};
use crate::errors::AppResult;

/// External identity provider operations.
///
/// All four calls are asynchronous and may reject with a
/// provider-defined, human-readable message (`AppError::Provider`).
/// Once dispatched, a call runs to completion; cancellation is not
/// supported.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an email/password account
    async fn create_account(&self, email: &str, password: &str) -> AppResult<UserHandle>;

    /// Update display name and photo URL on an existing account
    async fn update_profile(&self, handle: &UserHandle, profile: ProfileUpdate) -> AppResult<()>;

    /// Run the federated (Google) consent flow
    async fn sign_in_with_google(&self) -> AppResult<UserHandle>;

    /// Send a password reset link to the given address
    async fn send_password_reset(&self, email: &str) -> AppResult<()>;
}
