//! Core session model and its storage and backend seams

pub mod backend;
#[cfg(feature = "ssr")]
pub mod config;
pub mod notification;
pub mod session;
pub mod storage;
pub mod user;
pub mod validation;

pub use backend::{AuthBackend, AuthError, MockBackend};
pub use notification::{Notification, NotificationType};
pub use session::{STORAGE_KEY_USER, SessionStore};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
#[cfg(not(feature = "ssr"))]
pub use storage::BrowserStorage;
pub use user::{AccountType, User};
