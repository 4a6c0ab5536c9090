//! Domain layer - Core business entities and logic
//!
//! This module contains the models that represent one registration
//! submission, independent of any provider or UI framework.
//!
//! DDD: Domain layer has NO external-collaborator dependencies.
//! Contains: Value Objects (form snapshot, validation verdict),
//! the password strength policy and the workflow state types.

pub mod password;
pub mod registration;
pub mod user;

pub use registration::{
    RegistrationInput, RegistrationOutcome, RegistrationState, RejectReason, ValidationResult,
};
pub use user::{ProfileUpdate, UserHandle};
