use alloc::string::String;

/// Error surfaced by a [`DecisionStore`](crate::DecisionStore) backend.
///
/// Store failures never escape the engine: a failing store makes the
/// necessity detector fail open, so the workaround is assumed needed rather
/// than silently disabled.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The persistent store does not exist in this environment (private
    /// browsing, sandboxed frame, non-browser host).
    #[error("persistent storage unavailable")]
    Unavailable,
    /// The store exists but rejected the operation (quota, serialization).
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// A custom-property name that does not match
/// `--[A-Za-z0-9][A-Za-z0-9_-]*`.
#[derive(Debug, thiserror::Error)]
#[error("invalid custom property name: {name:?}")]
pub struct InvalidPropertyName {
    pub name: String,
}
