//! Shared view-layer types.

mod visibility;

pub use visibility::VisibilityState;
