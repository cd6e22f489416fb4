use store::StoreError;
use thiserror::Error;

/// Failures surfaced to feature code by the domain façades, in both modes.
/// Suitable for user-facing handling (e.g. a toast); nothing here is retried
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("an account with this email already exists")]
    DuplicateEmail,
    #[error("user not found")]
    UserNotFound,
    #[error("post not found")]
    PostNotFound,
    #[error("not authenticated")]
    NotAuthenticated,
    /// A Remote-mode call failed. There is no silent fallback to Local
    /// mid-session.
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::DuplicateEmail,
            StoreError::UserNotFound => Self::UserNotFound,
            StoreError::PostNotFound => Self::PostNotFound,
            StoreError::NotAuthenticated => Self::NotAuthenticated,
        }
    }
}
