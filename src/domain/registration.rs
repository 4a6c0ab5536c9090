//! Registration domain types - form snapshot, validation verdict and
//! workflow state.
//!
//! DDD: These types model one submission and nothing else. A snapshot
//! is taken when the user submits, validated synchronously, and
//! discarded when the workflow reaches a terminal state.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use validator::Validate;

use crate::config::{
    MSG_PASSWORD_MISMATCH_TITLE, MSG_WEAK_PASSWORD_TEXT, MSG_WEAK_PASSWORD_TITLE,
};
use crate::domain::password;
use crate::domain::user::UserHandle;
use crate::errors::{AppError, AppResult};

/// Reason a submission was rejected before any provider call.
///
/// Both reasons are fully recovered in place: the form stays populated
/// and the user corrects and resubmits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Password fails the strength policy
    WeakPassword,
    /// Password and confirm-password differ
    PasswordMismatch,
}

impl RejectReason {
    /// User-facing notification title for this rejection.
    pub fn title(&self) -> &'static str {
        match self {
            RejectReason::WeakPassword => MSG_WEAK_PASSWORD_TITLE,
            RejectReason::PasswordMismatch => MSG_PASSWORD_MISMATCH_TITLE,
        }
    }

    /// Optional explanatory text shown under the title.
    pub fn text(&self) -> Option<&'static str> {
        match self {
            RejectReason::WeakPassword => Some(MSG_WEAK_PASSWORD_TEXT),
            RejectReason::PasswordMismatch => None,
        }
    }
}

/// Verdict of the synchronous pre-flight credential checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(RejectReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// States of the registration submission workflow.
///
/// `Rejected` and `Failed` are terminal for the current submission;
/// the next submission resets the workflow to `Validating`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationState {
    /// No submission in progress
    Idle,
    /// Snapshot taken, pre-flight checks running
    Validating,
    /// Pre-flight checks failed; no provider call was made
    Rejected(RejectReason),
    /// Account-creation call outstanding
    Submitting,
    /// Account exists (profile completeness not required)
    Succeeded,
    /// Provider rejected the account creation
    Failed(String),
}

/// Terminal result of one submission.
///
/// Total: the workflow folds every failure mode into this enum and
/// never returns an `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    /// Rejected before any network call
    Rejected(RejectReason),
    /// Account created; handle returned by the provider
    Succeeded(UserHandle),
    /// Provider rejected the creation; message verbatim
    Failed(String),
}

/// Snapshot of the five registration form fields.
///
/// Field names are a contract with the markup (`username`, `photo`,
/// `email`, `password`, `confirmpaddword`). Missing fields decode as
/// empty strings, matching HTML form semantics. Exists only for the
/// duration of one submission; never persisted.
#[derive(Clone, Default, Deserialize, Validate)]
pub struct RegistrationInput {
    /// Display name applied to the profile after creation
    #[serde(default)]
    pub username: String,
    /// Profile photo URL applied after creation
    #[serde(default, rename = "photo")]
    pub photo_url: String,
    /// Account email address
    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Candidate password
    #[serde(default)]
    pub password: String,
    /// Confirmation copy of the password (field name sic, see markup)
    #[serde(default, rename = "confirmpaddword")]
    pub confirm_password: String,
}

// Don't expose passwords in debug output (security)
impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("username", &self.username)
            .field("photo_url", &self.photo_url)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

impl RegistrationInput {
    /// Decode a snapshot from submitted form fields.
    ///
    /// # Errors
    /// Returns `AppError::Form` if the payload cannot be decoded.
    pub fn from_form(fields: &HashMap<String, String>) -> AppResult<Self> {
        let value = serde_json::to_value(fields).map_err(|e| AppError::form(e.to_string()))?;
        serde_json::from_value(value).map_err(|e| AppError::form(e.to_string()))
    }

    /// Format-level checks the markup layer runs before submission
    /// (the original form relied on the browser's `type="email"`).
    ///
    /// Not part of the workflow's rejection taxonomy.
    ///
    /// # Errors
    /// Returns `AppError::Validation` listing every failed field.
    pub fn validate_format(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))
    }

    /// Pre-flight credential checks: password strength first, then the
    /// confirmation match. Synchronous; short-circuits before any
    /// network call.
    pub fn validate_credentials(&self) -> ValidationResult {
        if let ValidationResult::Invalid(reason) = password::check_strength(&self.password) {
            return ValidationResult::Invalid(reason);
        }
        if self.password != self.confirm_password {
            return ValidationResult::Invalid(RejectReason::PasswordMismatch);
        }
        ValidationResult::Valid
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        FIELD_CONFIRM_PASSWORD, FIELD_EMAIL, FIELD_PASSWORD, FIELD_PHOTO, FIELD_USERNAME,
    };

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_form_maps_contract_names() {
        // The published field-name constants and the serde renames must
        // agree; decoding through the constants proves it.
        let input = RegistrationInput::from_form(&form(&[
            (FIELD_USERNAME, "Ada"),
            (FIELD_PHOTO, "https://example.com/ada.png"),
            (FIELD_EMAIL, "ada@example.com"),
            (FIELD_PASSWORD, "Abc123!@"),
            (FIELD_CONFIRM_PASSWORD, "Abc123!@"),
        ]))
        .unwrap();

        assert_eq!(input.username, "Ada");
        assert_eq!(input.photo_url, "https://example.com/ada.png");
        assert_eq!(input.email, "ada@example.com");
        assert_eq!(input.password, "Abc123!@");
        assert_eq!(input.confirm_password, "Abc123!@");
    }

    #[test]
    fn test_from_form_missing_fields_default_to_empty() {
        let input = RegistrationInput::from_form(&form(&[("email", "ada@example.com")])).unwrap();

        assert_eq!(input.email, "ada@example.com");
        assert!(input.username.is_empty());
        assert!(input.password.is_empty());
        assert!(input.confirm_password.is_empty());
    }

    #[test]
    fn test_validate_credentials_ok() {
        let input = RegistrationInput {
            password: "Abc123!@".to_string(),
            confirm_password: "Abc123!@".to_string(),
            ..Default::default()
        };
        assert!(input.validate_credentials().is_valid());
    }

    #[test]
    fn test_weak_password_checked_before_mismatch() {
        // Weak AND mismatched: strength runs first, so the reason is
        // WeakPassword.
        let input = RegistrationInput {
            password: "short".to_string(),
            confirm_password: "different".to_string(),
            ..Default::default()
        };
        assert_eq!(
            input.validate_credentials(),
            ValidationResult::Invalid(RejectReason::WeakPassword)
        );
    }

    #[test]
    fn test_mismatch_rejected() {
        let input = RegistrationInput {
            password: "Abc123!@".to_string(),
            confirm_password: "Abc123!?".to_string(),
            ..Default::default()
        };
        assert_eq!(
            input.validate_credentials(),
            ValidationResult::Invalid(RejectReason::PasswordMismatch)
        );
    }

    #[test]
    fn test_validate_format_rejects_bad_email() {
        let input = RegistrationInput {
            email: "not-an-email".to_string(),
            ..Default::default()
        };
        let err = input.validate_format().unwrap_err();
        assert!(err.to_string().contains("Invalid email format"));
    }

    #[test]
    fn test_validate_format_accepts_valid_email() {
        let input = RegistrationInput {
            email: "a@b.com".to_string(),
            ..Default::default()
        };
        assert!(input.validate_format().is_ok());
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let input = RegistrationInput {
            password: "Abc123!@".to_string(),
            confirm_password: "Abc123!@".to_string(),
            ..Default::default()
        };
        let debug = format!("{:?}", input);
        assert!(!debug.contains("Abc123!@"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_reject_reason_messages() {
        assert_eq!(
            RejectReason::WeakPassword.title(),
            "Password is not strong enough!"
        );
        assert!(RejectReason::WeakPassword.text().is_some());
        assert_eq!(
            RejectReason::PasswordMismatch.title(),
            "Passwords do not match!"
        );
        assert!(RejectReason::PasswordMismatch.text().is_none());
    }
}
