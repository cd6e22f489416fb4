use thiserror::Error;

/// Failures surfaced to callers by the local entity store.
///
/// Persistence corruption is not represented here: the codec recovers it
/// locally by substituting the caller-supplied default (see
/// [`crate::codec::load`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("an account with this email already exists")]
    DuplicateEmail,
    #[error("user not found")]
    UserNotFound,
    #[error("post not found")]
    PostNotFound,
    #[error("not authenticated")]
    NotAuthenticated,
}
