//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Landing page (home)
//! - Login page
//! - Register page
//! - Upgrade page
//! - Not found page

mod landing;
mod login;
mod not_found;
mod register;
mod upgrade;

pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use upgrade::UpgradePage;
