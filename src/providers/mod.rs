//! External collaborator interfaces.
//!
//! The identity provider, notification surface and router are external
//! to this crate; only their contracts live here, as traits the
//! workflows receive by constructor injection.

mod identity;
mod notify;
mod router;

pub use identity::IdentityProvider;
pub use notify::{LogNotifier, Notification, NotificationKind, Notifier};
pub use router::Navigator;

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use identity::MockIdentityProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use notify::MockNotifier;
#[cfg(any(test, feature = "test-utils"))]
pub use router::MockNavigator;
