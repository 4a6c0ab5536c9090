//! Client-side router interface.

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Client-side route changes.
///
/// Success paths navigate to the configured home route; failure paths
/// never navigate.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Navigator: Send + Sync {
    /// Trigger a client-side route change
    fn navigate(&self, path: &str);
}
