//! Login page component
//!
//! A standalone page for user login, redirects home once signed in.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::LoginForm;
use crate::ui::layout::{SiteFooter, SiteHeader};
use crate::ui::notifications::NotificationManager;
use crate::ui::session::SessionContext;

/// Login page component
#[component]
pub fn LoginPage(session: SessionContext, notifications: NotificationManager) -> impl IntoView {
    // Redirect once authenticated, including right after a successful login
    Effect::new(move |_| {
        if session.is_authenticated() {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
    });

    let on_success = move |_| {
        if let Some(user) = session.user() {
            notifications.success("Signed in", format!("Welcome back, {}", user.name));
        }
    };

    let on_register_click = move |_| {
        let navigate = use_navigate();
        navigate("/register", Default::default());
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <SiteHeader session=session />

            <main class="flex-1 flex items-center justify-center p-4">
                <LoginForm
                    session=session
                    on_success=Callback::new(on_success)
                    on_register_click=Callback::new(on_register_click)
                />
            </main>

            <SiteFooter />
        </div>
    }
}
