//! Session store
//!
//! Owns the current [`User`] for the lifetime of the running UI and keeps the
//! durable copy in a [`KeyValueStore`] in step with it:
//! - `initialize` restores the persisted record, falling back to signed out
//! - `login` / `register` / `upgrade` replace the user and persist it
//! - `logout` clears both the user and the persisted record
//!
//! A session is authenticated exactly when it holds a user.

use leptos::logging::{log, warn};

use super::backend::{AuthBackend, AuthError};
use super::storage::KeyValueStore;
use super::user::User;

/// Key under which the user record is persisted
pub const STORAGE_KEY_USER: &str = "smartjects_user";

/// Session store over a durable store `S` and a backend client `B`
#[derive(Debug, Clone)]
pub struct SessionStore<S, B> {
    storage: S,
    backend: B,
    user: Option<User>,
}

impl<S: KeyValueStore, B: AuthBackend> SessionStore<S, B> {
    /// Restore the session persisted in `storage`
    ///
    /// Never fails: a read error, a missing record or a record that does not
    /// parse all leave the store signed out. A record that does not parse is
    /// removed.
    pub fn initialize(storage: S, backend: B) -> Self {
        let user = restore_user(&storage);
        Self {
            storage,
            backend,
            user,
        }
    }

    /// Current user, if signed in
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Sign in, replacing any current user
    ///
    /// On error the previous session is kept as is.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        let user = self.backend.login(email, password).await?;
        log!("Signed in as account {}", user.id);
        Ok(self.adopt(user))
    }

    /// Create an account and sign in as it
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<&User, AuthError> {
        let user = self.backend.register(name, email, password).await?;
        log!("Registered account {}", user.id);
        Ok(self.adopt(user))
    }

    /// Move the current user to the paid tier
    pub async fn upgrade(&mut self) -> Result<&User, AuthError> {
        let current = self.user.as_ref().ok_or(AuthError::NotAuthenticated)?;
        if current.account_type.is_paid() {
            return Err(AuthError::AlreadyPaid);
        }

        let user = self.backend.upgrade(current).await?;
        log!("Upgraded account {} to {}", user.id, user.account_type.as_str());
        Ok(self.adopt(user))
    }

    /// Sign out and forget the persisted record
    pub fn logout(&mut self) {
        self.user = None;
        if let Err(e) = self.storage.remove(STORAGE_KEY_USER) {
            warn!("Failed to clear persisted session: {}", e);
        }
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    fn adopt(&mut self, user: User) -> &User {
        persist_user(&self.storage, &user);
        self.user.insert(user)
    }
}

fn restore_user<S: KeyValueStore>(storage: &S) -> Option<User> {
    let raw = match storage.get(STORAGE_KEY_USER) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Failed to read persisted session: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<User>(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("Discarding malformed persisted session: {}", e);
            if let Err(e) = storage.remove(STORAGE_KEY_USER) {
                warn!("Failed to clear persisted session: {}", e);
            }
            None
        }
    }
}

// The in-memory session stays authoritative if the write fails.
fn persist_user<S: KeyValueStore>(storage: &S, user: &User) {
    match serde_json::to_string(user) {
        Ok(json) => {
            if let Err(e) = storage.set(STORAGE_KEY_USER, &json) {
                warn!("Failed to persist session: {}", e);
            }
        }
        Err(e) => warn!("Failed to serialize session: {}", e),
    }
}
