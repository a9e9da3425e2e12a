pub mod auth;
pub mod icon;
pub mod layout;
pub mod notifications;
pub mod pages;
pub mod session;

pub use icon::{Icon, icons};
pub use notifications::{NotificationManager, NotificationsContainer};
pub use session::{SessionContext, SessionState};
