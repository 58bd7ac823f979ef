use thiserror::Error;

/// Raw failure surfaced by a [`super::DocumentStore`] implementation.
///
/// The fetcher and enricher propagate these untouched; the services layer is
/// the single point that maps them onto user-facing categories.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend reported it is temporarily unavailable.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The caller lacks permission for the queried collection.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The caller is not authenticated.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Any other backend status code.
    #[error("backend error {code}: {message}")]
    Status { code: String, message: String },

    /// Transport-level failure, e.g. no connectivity.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
}

pub type BackendResult<T> = Result<T, BackendError>;
