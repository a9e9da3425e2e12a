//! Backend client used by the session store
//!
//! There is no real auth service yet. [`MockBackend`] answers every call
//! locally; a network client implements [`AuthBackend`] and is dropped in
//! without changing the session store or the views.

use uuid::Uuid;

use super::user::{AccountType, User};

/// Auth operation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Account is already on the paid plan")]
    AlreadyPaid,

    #[error("Signed out before the request completed")]
    Superseded,

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Identity operations served by a backend
///
/// Calls may suspend on the network. Callers holding a session across the
/// await must expect the user to sign out in the meantime.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// Resolve credentials to a user
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Create a new account
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError>;

    /// Move an account to the paid tier, returning the updated record
    async fn upgrade(&self, user: &User) -> Result<User, AuthError>;
}

/// Placeholder identity returned by [`MockBackend::login`]
pub const MOCK_USER_ID: &str = "1";
pub const MOCK_USER_NAME: &str = "Demo User";

/// Local stand-in for the auth service
///
/// Login always succeeds with a fixed identity carrying the supplied email.
/// Register mints a fresh UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockBackend;

impl AuthBackend for MockBackend {
    async fn login(&self, email: &str, _password: &str) -> Result<User, AuthError> {
        Ok(User::new(MOCK_USER_ID, MOCK_USER_NAME, email))
    }

    async fn register(&self, name: &str, email: &str, _password: &str) -> Result<User, AuthError> {
        Ok(User::new(Uuid::new_v4().to_string(), name, email))
    }

    async fn upgrade(&self, user: &User) -> Result<User, AuthError> {
        Ok(user.clone().with_account_type(AccountType::Paid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_login_uses_placeholder_identity() {
        let user = MockBackend.login("me@example.com", "secret").await.unwrap();

        assert_eq!(user.id, MOCK_USER_ID);
        assert_eq!(user.name, MOCK_USER_NAME);
        assert_eq!(user.email, "me@example.com");
        assert_eq!(user.account_type, AccountType::Free);
        assert!(user.avatar.is_none());
    }

    #[tokio::test]
    async fn test_mock_register_generates_unique_ids() {
        let a = MockBackend
            .register("Ann", "ann@example.com", "pw")
            .await
            .unwrap();
        let b = MockBackend
            .register("Ann", "ann@example.com", "pw")
            .await
            .unwrap();

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[tokio::test]
    async fn test_mock_upgrade_sets_paid() {
        let user = User::new("9", "Kim", "kim@example.com");
        let upgraded = MockBackend.upgrade(&user).await.unwrap();

        assert_eq!(upgraded.account_type, AccountType::Paid);
        assert_eq!(upgraded.id, user.id);
        assert_eq!(upgraded.email, user.email);
    }

    #[test]
    fn test_auth_error_display() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(
            AuthError::Backend("timeout".to_string()).to_string(),
            "Backend error: timeout"
        );
        assert_eq!(
            AuthError::Superseded.to_string(),
            "Signed out before the request completed"
        );
    }
}
