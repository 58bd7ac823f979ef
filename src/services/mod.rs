//! Service layer orchestrating page loads for the UI.
//!
//! This is the single place where raw [`BackendError`]s are classified into
//! user-facing [`LoadError`] categories. Services never panic and never let
//! a backend error cross their boundary unclassified. No retry happens here;
//! retry is a user-initiated re-invocation of the load functions.

use thiserror::Error;

use crate::backend::BackendError;

pub mod community;
pub mod pets;

/// User-facing load failure category.
///
/// Each variant carries a stable message key for localization and an English
/// fallback template via `Display`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The backend is unreachable or unavailable.
    #[error("Network unavailable. Check your connection and try again.")]
    Network,

    /// The caller is not allowed to read this content.
    #[error("You do not have access to this content.")]
    AccessDenied,

    /// The caller must sign in first.
    #[error("Please sign in to continue.")]
    AuthRequired,

    /// The backend reported an error this layer does not recognize.
    #[error("The server reported an error: {0}")]
    Backend(String),

    /// Catch-all for non-backend failures.
    #[error("Something went wrong: {0}")]
    Unexpected(String),
}

impl LoadError {
    /// Stable identifier for looking up a localized message.
    pub fn message_key(&self) -> &'static str {
        match self {
            LoadError::Network => "error.network",
            LoadError::AccessDenied => "error.access_denied",
            LoadError::AuthRequired => "error.auth_required",
            LoadError::Backend(_) => "error.backend",
            LoadError::Unexpected(_) => "error.unexpected",
        }
    }
}

impl From<BackendError> for LoadError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unavailable(_) => LoadError::Network,
            BackendError::PermissionDenied(_) => LoadError::AccessDenied,
            BackendError::Unauthenticated(_) => LoadError::AuthRequired,
            BackendError::Status { code, message } => {
                LoadError::Backend(format!("{code}: {message}"))
            }
            BackendError::Transport(_) => LoadError::Network,
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
