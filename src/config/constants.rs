//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Password Policy
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Symbols a password may (and must, at least once) contain
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

// =============================================================================
// Routes
// =============================================================================

/// Default route navigated to after a successful sign-up or sign-in
pub const DEFAULT_HOME_ROUTE: &str = "/";

// =============================================================================
// Form Field Names
// =============================================================================
// These names are a contract with the registration markup. The
// confirm-password field keeps the markup's historical misspelling;
// renaming it here would break existing forms.

/// Username field name
pub const FIELD_USERNAME: &str = "username";

/// Photo URL field name
pub const FIELD_PHOTO: &str = "photo";

/// Email field name
pub const FIELD_EMAIL: &str = "email";

/// Password field name
pub const FIELD_PASSWORD: &str = "password";

/// Confirm-password field name (sic)
pub const FIELD_CONFIRM_PASSWORD: &str = "confirmpaddword";

// =============================================================================
// User-Facing Messages
// =============================================================================

/// Weak password rejection title
pub const MSG_WEAK_PASSWORD_TITLE: &str = "Password is not strong enough!";

/// Weak password rejection explanatory text
pub const MSG_WEAK_PASSWORD_TEXT: &str =
    "Must be at least 8 characters, include a number, a letter, and a special character.";

/// Password mismatch rejection title
pub const MSG_PASSWORD_MISMATCH_TITLE: &str = "Passwords do not match!";

/// Successful registration title
pub const MSG_REGISTERED_TITLE: &str = "Successfully Registered!";

/// Failed registration title (provider message attached as text)
pub const MSG_REGISTRATION_FAILED_TITLE: &str = "Registration Failed";

/// Successful federated sign-in title
pub const MSG_GOOGLE_SUCCESS_TITLE: &str = "Successfully Logged In with Google!";

/// Failed federated sign-in title (provider message attached as text)
pub const MSG_GOOGLE_FAILED_TITLE: &str = "Google Login Failed";

/// Password reset confirmation title
pub const MSG_RESET_SENT_TITLE: &str = "Reset Link Sent!";

/// Password reset confirmation text
pub const MSG_RESET_SENT_TEXT: &str = "Check your email to reset your password.";

/// Password reset failure title (provider message attached as text)
pub const MSG_RESET_FAILED_TITLE: &str = "Reset Request Failed";
