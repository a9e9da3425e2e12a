//! Page chrome shared by every route

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::auth::UserMenu;
use crate::ui::session::SessionContext;

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="w-8 h-8 bg-yellow-300 rounded-lg flex items-center justify-center">
            <svg class="w-5 h-5 text-black" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                      d="M13 10V3L4 14h7v7l9-11h-7z" />
            </svg>
        </div>
    }
}

/// Top navigation bar with the user menu
#[component]
pub fn SiteHeader(session: SessionContext) -> impl IntoView {
    view! {
        <header class="border-b border-gray-200 bg-white/80 backdrop-blur-md">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold text-gray-900">"Smartjects"</span>
                    </A>
                    <nav class="flex items-center gap-4">
                        <A
                            href="/upgrade"
                            attr:class="hidden sm:block text-sm font-medium text-gray-600 hover:text-gray-900 transition-colors"
                        >
                            "Pricing"
                        </A>
                        <UserMenu session=session />
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="py-4 border-t border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <p class="text-center text-sm text-gray-500">
                    "© 2025 Smartjects. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
