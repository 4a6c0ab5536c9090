//! Password strength policy - Domain layer credential validation.
//!
//! DDD: Pure domain logic with no side effects. A candidate password
//! is strong when it is at least eight characters drawn exclusively
//! from letters, digits and the allowed symbol set, with at least one
//! character of each class present.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS};
use crate::domain::registration::{RejectReason, ValidationResult};

/// Whitelist of characters a password may contain. The `regex` crate
/// has no lookahead, so the per-class requirements are separate checks
/// below rather than one pattern. The digit range is spelled `0-9`
/// explicitly: `\d` matches non-ASCII decimal digits here, and the
/// policy is ASCII-only.
static ALLOWED_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]+$").expect("charset pattern is valid"));

/// Check a candidate password against the strength policy.
///
/// Total function: same input always yields the same verdict, never
/// fails, never panics.
pub fn check_strength(candidate: &str) -> ValidationResult {
    if is_strong(candidate) {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(RejectReason::WeakPassword)
    }
}

/// True when the candidate satisfies every strength requirement:
/// length, charset whitelist, and one letter, digit and symbol each.
pub fn is_strong(candidate: &str) -> bool {
    candidate.chars().count() >= MIN_PASSWORD_LENGTH
        && ALLOWED_CHARSET.is_match(candidate)
        && candidate.chars().any(|c| c.is_ascii_alphabetic())
        && candidate.chars().any(|c| c.is_ascii_digit())
        && candidate.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}
