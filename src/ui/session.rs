//! Reactive session handle for the view tree
//!
//! [`SessionContext`] wraps a [`SessionStore`] in signals. It is built once
//! by `App` and handed to each view as a prop, so a view can only exist once
//! a session does.

use leptos::logging::warn;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use crate::core::BrowserStorage;
use crate::core::{AuthError, KeyValueStore, MemoryStore, MockBackend, SessionStore, StorageError, User};

/// Durable store backing the session
///
/// The browser's `localStorage` when it is reachable, memory otherwise
/// (server rendering, private browsing with storage disabled).
#[derive(Debug, Clone)]
pub enum SessionStorage {
    #[cfg(not(feature = "ssr"))]
    Browser(BrowserStorage),
    Memory(MemoryStore),
}

impl SessionStorage {
    pub fn detect() -> Self {
        #[cfg(not(feature = "ssr"))]
        {
            match BrowserStorage::open() {
                Ok(storage) => return SessionStorage::Browser(storage),
                Err(e) => warn!("localStorage unavailable, session will not persist: {}", e),
            }
        }
        SessionStorage::Memory(MemoryStore::new())
    }
}

impl KeyValueStore for SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            #[cfg(not(feature = "ssr"))]
            SessionStorage::Browser(s) => s.get(key),
            SessionStorage::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            #[cfg(not(feature = "ssr"))]
            SessionStorage::Browser(s) => s.set(key, value),
            SessionStorage::Memory(s) => s.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            #[cfg(not(feature = "ssr"))]
            SessionStorage::Browser(s) => s.remove(key),
            SessionStorage::Memory(s) => s.remove(key),
        }
    }
}

/// Session store as used by the views
pub type AppSession = SessionStore<SessionStorage, MockBackend>;

// `web_sys::Storage` is not `Send`, so the browser keeps the store in
// thread-local arena storage.
#[cfg(feature = "ssr")]
type SessionArena = SyncStorage;
#[cfg(not(feature = "ssr"))]
type SessionArena = LocalStorage;

/// Session state as seen by the views
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Restoring from storage after hydration
    #[default]
    Loading,
    SignedOut,
    SignedIn(User),
}

impl From<Option<User>> for SessionState {
    fn from(user: Option<User>) -> Self {
        match user {
            Some(user) => SessionState::SignedIn(user),
            None => SessionState::SignedOut,
        }
    }
}

/// Session handle passed to views
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current session state
    pub state: RwSignal<SessionState>,
    /// An auth operation is in flight
    pub loading: RwSignal<bool>,
    /// Error message from the last operation
    pub error: RwSignal<Option<String>>,
    /// Bumped on every logout so in-flight operations can tell they are stale
    generation: RwSignal<u64>,
    store: StoredValue<AppSession, SessionArena>,
}

impl SessionContext {
    /// Create the session for this UI process
    ///
    /// Both server and client start signed out so hydration markup matches;
    /// the client then restores the persisted session in an effect.
    pub fn new() -> Self {
        let state = RwSignal::new(SessionState::SignedOut);
        let store = StoredValue::new_with_storage(SessionStore::initialize(
            SessionStorage::Memory(MemoryStore::new()),
            MockBackend,
        ));

        let ctx = Self {
            state,
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            generation: RwSignal::new(0),
            store,
        };

        #[cfg(not(feature = "ssr"))]
        {
            Effect::new(move |_| {
                state.set(SessionState::Loading);
                let session = SessionStore::initialize(SessionStorage::detect(), MockBackend);
                let user = session.current_user().cloned();
                store.set_value(session);
                state.set(user.into());
            });
        }

        ctx
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), SessionState::SignedIn(_))
    }

    /// Current user (if signed in)
    pub fn user(&self) -> Option<User> {
        match self.state.get() {
            SessionState::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    pub async fn login(self, email: String, password: String) -> Result<User, AuthError> {
        let started = self.begin();
        let mut session = self.store.get_value();
        let result = session.login(&email, &password).await.cloned();
        self.finish(started, session, result)
    }

    pub async fn register(
        self,
        name: String,
        email: String,
        password: String,
    ) -> Result<User, AuthError> {
        let started = self.begin();
        let mut session = self.store.get_value();
        let result = session.register(&name, &email, &password).await.cloned();
        self.finish(started, session, result)
    }

    pub async fn upgrade(self) -> Result<User, AuthError> {
        let started = self.begin();
        let mut session = self.store.get_value();
        let result = session.upgrade().await.cloned();
        self.finish(started, session, result)
    }

    pub fn logout(&self) {
        self.generation.update(|g| *g += 1);
        self.store.update_value(|session| session.logout());
        self.error.set(None);
        self.state.set(SessionState::SignedOut);
    }

    /// Mark an operation in flight, returning the generation it started in
    fn begin(&self) -> u64 {
        self.loading.set(true);
        self.error.set(None);
        self.generation.get_untracked()
    }

    fn finish(
        &self,
        started: u64,
        mut session: AppSession,
        result: Result<User, AuthError>,
    ) -> Result<User, AuthError> {
        self.loading.set(false);

        // A logout landed while the backend was busy: drop the stale copy
        // and undo whatever record it persisted.
        if self.generation.get_untracked() != started {
            session.logout();
            warn!("Discarding session operation that outlived a logout");
            return Err(AuthError::Superseded);
        }

        let user = session.current_user().cloned();
        self.store.set_value(session);
        self.state.set(user.into());

        if let Err(e) = &result {
            warn!("Session operation failed: {}", e);
            self.error.set(Some(e.to_string()));
        }
        result
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AccountType, STORAGE_KEY_USER};

    #[test]
    fn test_session_state_from_user() {
        let user = User::new("1", "Demo", "demo@example.com");

        assert_eq!(
            SessionState::from(Some(user.clone())),
            SessionState::SignedIn(user)
        );
        assert_eq!(SessionState::from(None), SessionState::SignedOut);
        assert_eq!(SessionState::default(), SessionState::Loading);
    }

    #[test]
    fn test_memory_session_storage_round_trip() {
        let storage = SessionStorage::Memory(MemoryStore::new());

        storage.set(STORAGE_KEY_USER, "{}").unwrap();
        assert_eq!(storage.get(STORAGE_KEY_USER).unwrap(), Some("{}".to_string()));
        storage.remove(STORAGE_KEY_USER).unwrap();
        assert_eq!(storage.get(STORAGE_KEY_USER).unwrap(), None);
    }

    fn current_email(ctx: &SessionContext) -> Option<String> {
        match ctx.state.get_untracked() {
            SessionState::SignedIn(user) => Some(user.email),
            _ => None,
        }
    }

    #[tokio::test]
    async fn test_context_tracks_operations() {
        let owner = Owner::new();
        owner.set();
        let ctx = SessionContext::new();
        assert_eq!(ctx.state.get_untracked(), SessionState::SignedOut);

        let user = ctx
            .register("Ann".to_string(), "a@x.io".to_string(), "password1".to_string())
            .await
            .unwrap();
        assert_eq!(ctx.state.get_untracked(), SessionState::SignedIn(user));
        assert!(!ctx.loading.get_untracked());
        assert!(ctx.error.get_untracked().is_none());

        let upgraded = ctx.upgrade().await.unwrap();
        assert_eq!(upgraded.account_type, AccountType::Paid);

        // Second upgrade fails and surfaces the message
        assert_eq!(ctx.upgrade().await.unwrap_err(), AuthError::AlreadyPaid);
        assert_eq!(
            ctx.error.get_untracked(),
            Some("Account is already on the paid plan".to_string())
        );
        assert!(!ctx.loading.get_untracked());
        // Still signed in as the paid user
        assert_eq!(current_email(&ctx), Some("a@x.io".to_string()));

        ctx.logout();
        assert_eq!(ctx.state.get_untracked(), SessionState::SignedOut);
        assert!(ctx.error.get_untracked().is_none());
        assert!(ctx.store.with_value(|s| !s.is_authenticated()));

        ctx.login("b@x.io".to_string(), "secret".to_string())
            .await
            .unwrap();
        assert_eq!(current_email(&ctx), Some("b@x.io".to_string()));
    }

    #[tokio::test]
    async fn test_context_upgrade_signed_out_sets_error() {
        let owner = Owner::new();
        owner.set();
        let ctx = SessionContext::new();

        assert_eq!(ctx.upgrade().await.unwrap_err(), AuthError::NotAuthenticated);
        assert_eq!(ctx.error.get_untracked(), Some("Not signed in".to_string()));
        assert!(!ctx.loading.get_untracked());

        ctx.clear_error();
        assert!(ctx.error.get_untracked().is_none());
    }

    #[tokio::test]
    async fn test_logout_during_operation_wins() {
        let owner = Owner::new();
        owner.set();
        let ctx = SessionContext::new();

        // Replays what login does, with a logout between the await and the
        // write-back
        let started = ctx.begin();
        let mut session = ctx.store.get_value();
        let result = session.login("late@x.io", "pw").await.cloned();
        assert!(session.is_authenticated());
        ctx.logout();

        let outcome = ctx.finish(started, session, result);

        assert_eq!(outcome.unwrap_err(), AuthError::Superseded);
        assert_eq!(ctx.state.get_untracked(), SessionState::SignedOut);
        assert!(!ctx.loading.get_untracked());
        assert!(ctx.store.with_value(|s| !s.is_authenticated()));
        // The record the stale login wrote is gone too
        let restarted = ctx
            .store
            .with_value(|s| SessionStore::initialize(s.storage().clone(), MockBackend));
        assert!(!restarted.is_authenticated());
    }

    #[tokio::test]
    async fn test_app_session_register_then_logout() {
        let storage = SessionStorage::Memory(MemoryStore::new());
        let mut session: AppSession = SessionStore::initialize(storage.clone(), MockBackend);

        session
            .register("Dana", "dana@example.com", "password1")
            .await
            .unwrap();
        assert!(storage.get(STORAGE_KEY_USER).unwrap().is_some());

        session.logout();
        assert!(storage.get(STORAGE_KEY_USER).unwrap().is_none());
    }
}
