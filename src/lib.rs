//! Signup Flow - client-side registration workflow controller.
//!
//! Collects the five registration form fields, runs the synchronous
//! pre-flight credential checks and dispatches one of two mutually
//! exclusive sign-up paths (email/password or federated Google) to an
//! external identity provider, surfacing the outcome through a popup
//! notification surface and redirecting on success via a client-side
//! router. A separate flow handles password reset requests.
//!
//! # Architecture Layers
//!
//! - **config**: constants and environment-backed settings
//! - **domain**: form snapshot, password policy, workflow states
//! - **providers**: external collaborator interfaces (identity,
//!   notifications, routing)
//! - **services**: the three workflows and their container
//! - **types**: view-layer helpers (password visibility toggles)
//! - **errors**: centralized error handling
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use signup_flow::{Config, RegistrationInput, Services, ServiceContainer};
//!
//! let services = Services::with_providers(provider, notifier, navigator, Config::default());
//! let input = RegistrationInput::from_form(&form_fields)?;
//! let outcome = services.registration().register(input).await;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod providers;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{
    ProfileUpdate, RegistrationInput, RegistrationOutcome, RegistrationState, RejectReason,
    UserHandle, ValidationResult,
};
pub use errors::{AppError, AppResult};
pub use providers::{IdentityProvider, Navigator, Notification, NotificationKind, Notifier};
pub use services::{
    FederatedOutcome, FederatedSignInService, FederatedState, PasswordResetService,
    RegistrationService, ResetOutcome, ServiceContainer, Services,
};
pub use types::VisibilityState;
