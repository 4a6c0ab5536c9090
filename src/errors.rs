//! Centralized error handling.
//!
//! Provides a unified error type for the workflow layer. Local
//! pre-flight rejections (weak password, mismatch) are not errors:
//! they are `RejectReason` values recovered in place, and never
//! reach a provider.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Rejection from the external identity provider.
    /// The message is surfaced to the user verbatim.
    #[error("{0}")]
    Provider(String),

    /// Malformed form payload (non-string or undecodable fields)
    #[error("Invalid form input: {0}")]
    Form(String),

    /// Input format validation failure (e.g. email format)
    #[error("{0}")]
    Validation(String),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn provider(msg: impl Into<String>) -> Self {
        AppError::Provider(msg.into())
    }

    pub fn form(msg: impl Into<String>) -> Self {
        AppError::Form(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}
