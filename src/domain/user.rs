//! Provider-issued account handle and profile update payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Handle to an account held by the external identity provider.
///
/// Returned by account creation and federated sign-in. The workflow
/// never persists it; ownership of the account lives with the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserHandle {
    pub uid: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserHandle {
    /// Create a handle for a freshly created account (profile not yet set)
    pub fn new(uid: Uuid, email: impl Into<String>) -> Self {
        Self {
            uid,
            email: email.into(),
            display_name: None,
            photo_url: None,
            created_at: Utc::now(),
        }
    }
}

/// Best-effort profile update applied right after account creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub display_name: String,
    pub photo_url: String,
}

impl ProfileUpdate {
    pub fn new(display_name: impl Into<String>, photo_url: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            photo_url: photo_url.into(),
        }
    }
}
