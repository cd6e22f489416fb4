//! Account and session operations.

use store::models::{ProfileUpdate, UserRecord};
use store::KeyValueStore;

use crate::error::ApiError;
use crate::mode::BackendMode;

/// The `auth` domain façade.
pub struct AuthApi<S: KeyValueStore> {
    mode: BackendMode<S>,
}

impl<S: KeyValueStore> AuthApi<S> {
    pub fn new(mode: BackendMode<S>) -> Self {
        Self { mode }
    }

    /// Register a new account and open a session for it. Fails with
    /// [`ApiError::DuplicateEmail`] when the email is already taken.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserRecord, ApiError> {
        match &self.mode {
            BackendMode::Remote(client) => client.sign_up(email, password, name).await,
            BackendMode::Local(store) => Ok(store.sign_up(email, name)?),
        }
    }

    /// Open a session for an existing account. The Local branch looks up by
    /// email only — password checks are the remote backend's job, and demo
    /// mode is not a security boundary.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserRecord, ApiError> {
        match &self.mode {
            BackendMode::Remote(client) => client.sign_in(email, password).await,
            BackendMode::Local(store) => Ok(store.sign_in(email)?),
        }
    }

    /// Close the session. The account itself is untouched.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        match &self.mode {
            BackendMode::Remote(client) => client.sign_out().await,
            BackendMode::Local(store) => {
                store.sign_out();
                Ok(())
            }
        }
    }

    /// The currently signed-in user, if any.
    pub async fn current_user(&self) -> Result<Option<UserRecord>, ApiError> {
        match &self.mode {
            BackendMode::Remote(client) => client.current_user().await,
            BackendMode::Local(store) => Ok(store.current_user()),
        }
    }

    /// Merge partial profile fields into an account.
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<UserRecord, ApiError> {
        match &self.mode {
            BackendMode::Remote(client) => client.update_profile(user_id, update).await,
            BackendMode::Local(store) => Ok(store.update_profile(user_id, update)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use store::{EntityStore, MemoryStore};

    fn local_auth() -> AuthApi<MemoryStore> {
        let store = Arc::new(EntityStore::new(MemoryStore::new()));
        AuthApi::new(BackendMode::Local(store))
    }

    #[tokio::test]
    async fn test_sign_up_opens_session() {
        let auth = local_auth();
        let user = auth
            .sign_up("alice@example.com", "secret", "Alice")
            .await
            .unwrap();

        let session = auth.current_user().await.unwrap().unwrap();
        assert_eq!(session.id, user.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_surfaces_through_facade() {
        let auth = local_auth();
        auth.sign_up("alice@example.com", "secret", "Alice")
            .await
            .unwrap();

        let err = auth
            .sign_up("alice@example.com", "other", "Other")
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::DuplicateEmail);
    }

    #[tokio::test]
    async fn test_local_sign_in_ignores_password() {
        let auth = local_auth();
        auth.sign_up("alice@example.com", "secret", "Alice")
            .await
            .unwrap();
        auth.sign_out().await.unwrap();

        // Any password works in demo mode; only the email is checked.
        let user = auth
            .sign_in("alice@example.com", "wrong-password")
            .await
            .unwrap();
        assert_eq!(user.name, "Alice");

        let err = auth
            .sign_in("nobody@example.com", "secret")
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::UserNotFound);
    }

    #[tokio::test]
    async fn test_update_profile_through_facade() {
        let auth = local_auth();
        let user = auth
            .sign_up("alice@example.com", "secret", "Alice")
            .await
            .unwrap();

        let updated = auth
            .update_profile(
                &user.id,
                &ProfileUpdate {
                    name: Some("Alice K.".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Alice K.");

        let session = auth.current_user().await.unwrap().unwrap();
        assert_eq!(session.name, "Alice K.");
    }
}
