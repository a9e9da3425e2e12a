//! Authentication UI module
//!
//! Sign-in and sign-up forms and the header user menu. Each takes the
//! [`SessionContext`](crate::ui::session::SessionContext) it acts on.

mod login_form;
mod register_form;
mod user_menu;

pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use user_menu::{UserAvatar, UserMenu};
