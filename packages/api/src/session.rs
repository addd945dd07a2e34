//! # Session store
//!
//! [`Session`] holds at most one authenticated [`User`] and mirrors it into a
//! durable [`KeyValueStore`] entry so a reload keeps the user signed in.
//!
//! | Method | Behaviour |
//! |--------|-----------|
//! | [`restore`](Session::restore) | Reads the saved user; missing or corrupt means signed out. |
//! | [`login`](Session::login) / [`signup`](Session::signup) | Send the input as typed; replace the user only on success. |
//! | [`logout`](Session::logout) | Clears both copies unconditionally. |
//!
//! Callers showing errors to people should not display the [`RequestError`]
//! itself but the fixed [`LOGIN_FAILED_MESSAGE`] / [`SIGNUP_FAILED_MESSAGE`].

use store::{KeyValueStore, User};

use crate::client::Backend;
use crate::error::RequestError;

pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password";
pub const SIGNUP_FAILED_MESSAGE: &str = "Unable to sign up";

/// The client's record of the currently authenticated user.
#[derive(Clone, Debug)]
pub struct Session<K> {
    storage: K,
    user_key: String,
    user: Option<User>,
}

impl<K: KeyValueStore> Session<K> {
    /// Load the previously saved user, if any.
    pub fn restore(storage: K, user_key: &str) -> Self {
        let user = storage.get_json::<User>(user_key);
        if let Some(ref u) = user {
            tracing::debug!("Restored session for {}", u.email);
        }
        Self {
            storage,
            user_key: user_key.to_string(),
            user,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.user_id.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    pub async fn login<B: Backend>(
        &mut self,
        backend: &B,
        email: &str,
        password: &str,
    ) -> Result<&User, RequestError> {
        let user = backend.authenticate(email, password).await?;
        Ok(self.establish(user))
    }

    pub async fn signup<B: Backend>(
        &mut self,
        backend: &B,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<&User, RequestError> {
        let user = backend.register(email, password, name).await?;
        Ok(self.establish(user))
    }

    /// Forget the user in memory and in durable storage.
    pub fn logout(&mut self) {
        self.user = None;
        if let Err(e) = self.storage.remove(&self.user_key) {
            tracing::warn!("Failed to clear saved session: {e}");
        }
    }

    fn establish(&mut self, user: User) -> &User {
        if let Err(e) = self.storage.set_json(&self.user_key, &user) {
            tracing::warn!("Failed to persist session: {e}");
        }
        tracing::info!("Signed in as {}", user.email);
        self.user.insert(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeBackend;
    use store::MemoryStore;

    const KEY: &str = "user";

    fn backend() -> FakeBackend {
        FakeBackend::new().with_account("mei@example.tw", "hunter22", "u-mei")
    }

    #[test]
    fn test_restore_without_saved_user() {
        let session = Session::restore(MemoryStore::new(), KEY);
        assert!(!session.is_authenticated());
        assert!(session.user_id().is_none());
    }

    #[test]
    fn test_restore_ignores_corrupt_entry() {
        let storage = MemoryStore::new();
        storage.set(KEY, "{not json").unwrap();
        let session = Session::restore(storage, KEY);
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_login_persists_and_restores() {
        let storage = MemoryStore::new();
        let backend = backend();

        let mut session = Session::restore(storage.clone(), KEY);
        let user = session
            .login(&backend, "mei@example.tw", "hunter22")
            .await
            .unwrap();
        assert_eq!(user.user_id, "u-mei");
        assert!(storage.get(KEY).is_some());

        let restored = Session::restore(storage, KEY);
        assert_eq!(restored.user_id(), Some("u-mei"));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_prior_state() {
        let storage = MemoryStore::new();
        let backend = backend();
        let mut session = Session::restore(storage.clone(), KEY);
        session
            .login(&backend, "mei@example.tw", "hunter22")
            .await
            .unwrap();

        let err = session
            .login(&backend, "mei@example.tw", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(session.user_id(), Some("u-mei"));
        assert_eq!(storage.get_json::<User>(KEY).unwrap().user_id, "u-mei");
    }

    #[tokio::test]
    async fn test_signup_then_duplicate() {
        let storage = MemoryStore::new();
        let backend = FakeBackend::new();
        let mut session = Session::restore(storage.clone(), KEY);

        let user = session
            .signup(&backend, "kai@example.tw", "secret", "Kai")
            .await
            .unwrap()
            .clone();
        assert_eq!(user.email, "kai@example.tw");
        assert_eq!(user.display_name(), "Kai");

        session.logout();
        assert!(session
            .signup(&backend, "kai@example.tw", "secret", "Kai")
            .await
            .is_err());
        assert!(!session.is_authenticated());
        assert!(storage.get(KEY).is_none());
    }

    #[tokio::test]
    async fn test_credentials_are_sent_as_typed() {
        let backend = backend();
        let mut session = Session::restore(MemoryStore::new(), KEY);
        assert!(session
            .login(&backend, " mei@example.tw", "hunter22")
            .await
            .is_err());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_durable_copy() {
        let storage = MemoryStore::new();
        let backend = backend();
        let mut session = Session::restore(storage.clone(), KEY);
        session
            .login(&backend, "mei@example.tw", "hunter22")
            .await
            .unwrap();

        session.logout();
        assert!(session.user().is_none());
        assert!(storage.get(KEY).is_none());
        assert!(Session::restore(storage, KEY).user().is_none());

        // Logging out again is harmless.
        session.logout();
    }
}
