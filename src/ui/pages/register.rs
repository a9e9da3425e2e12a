//! Register page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::RegisterForm;
use crate::ui::layout::{SiteFooter, SiteHeader};
use crate::ui::notifications::NotificationManager;
use crate::ui::session::SessionContext;

#[component]
pub fn RegisterPage(session: SessionContext, notifications: NotificationManager) -> impl IntoView {
    // Redirect once authenticated, including right after sign-up
    Effect::new(move |_| {
        if session.is_authenticated() {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
    });

    let on_success = move |_| {
        notifications.success("Account created", "You are on the Free plan");
    };

    let on_login_click = move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <SiteHeader session=session />

            <main class="flex-1 flex items-center justify-center p-4">
                <RegisterForm
                    session=session
                    on_success=Callback::new(on_success)
                    on_login_click=Callback::new(on_login_click)
                />
            </main>

            <SiteFooter />
        </div>
    }
}
