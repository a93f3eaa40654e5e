use thiserror::Error;

/// Failures reported by a [`Store`](crate::store::Store).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No project with the given name exists.
    #[error("project not found: {0}")]
    NotFound(String),

    /// The store could not be reached or rejected the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store answered with something that is not a valid record.
    #[error("malformed store response: {0}")]
    Malformed(String),
}
