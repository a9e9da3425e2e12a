//! Upgrade page component
//!
//! Moves a free account to the paid tier through the session backend and
//! reports the outcome as a toast.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::{AccountType, Notification};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{SiteFooter, SiteHeader};
use crate::ui::notifications::NotificationManager;
use crate::ui::session::SessionContext;

#[component]
pub fn UpgradePage(session: SessionContext, notifications: NotificationManager) -> impl IntoView {
    let on_upgrade = move |_| {
        spawn_local(async move {
            match session.upgrade().await {
                Ok(user) => notifications.success(
                    "Upgrade complete",
                    format!("{} is now on the {} plan", user.email, user.account_type.display_name()),
                ),
                Err(e) => notifications.notify(Notification::from_auth_error("Upgrade failed", &e)),
            }
        });
    };

    let account_type = move || session.user().map(|u| u.account_type);

    view! {
        <Title text="Upgrade - Smartjects" />

        <div class="min-h-screen bg-gray-50 flex flex-col">
            <SiteHeader session=session />

            <main class="flex-1 max-w-3xl w-full mx-auto px-4 py-16">
                <h1 class="text-3xl font-bold text-gray-900 text-center mb-2">"Upgrade your plan"</h1>
                <p class="text-gray-600 text-center mb-10">
                    "Unlock unlimited smartject matches and direct contact with teams."
                </p>

                <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-8 text-center">
                    {move || match account_type() {
                        None => view! {
                            <p class="text-gray-600 mb-6">"Sign in to upgrade your account."</p>
                            <A
                                href="/login"
                                attr:class="inline-block px-6 py-3 bg-yellow-300 hover:bg-yellow-400 text-black font-medium rounded-lg transition-colors"
                            >
                                "Sign In"
                            </A>
                        }
                        .into_any(),
                        Some(AccountType::Paid) => view! {
                            <div class="flex items-center justify-center gap-2 text-green-600 font-medium">
                                <Icon name=icons::CHECK class="h-5 w-5" />
                                "You are on the Pro plan"
                            </div>
                        }
                        .into_any(),
                        Some(AccountType::Free) => view! {
                            <p class="text-gray-600 mb-6">"You are currently on the Free plan."</p>
                            <button
                                class="px-6 py-3 bg-yellow-300 hover:bg-yellow-400 text-black font-medium rounded-lg
                                       disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                                disabled=move || session.loading.get()
                                on:click=on_upgrade
                            >
                                {move || if session.loading.get() { "Upgrading..." } else { "Upgrade to Pro" }}
                            </button>
                        }
                        .into_any(),
                    }}
                </div>
            </main>

            <SiteFooter />
        </div>
    }
}
