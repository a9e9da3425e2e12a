//! User menu component
//!
//! Header widget: sign-in / sign-up links when signed out, avatar with a
//! dropdown (plan, upgrade, sign out) when signed in.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::User;
use crate::ui::icon::{Icon, icons};
use crate::ui::session::{SessionContext, SessionState};

/// User menu component for the header
#[component]
pub fn UserMenu(session: SessionContext) -> impl IntoView {
    let menu_open = RwSignal::new(false);

    let handle_logout = move |_| {
        menu_open.set(false);
        session.logout();
    };

    view! {
        <div class="relative">
            {move || match session.state.get() {
                SessionState::Loading => view! {
                    <div class="w-8 h-8 rounded-full bg-gray-200 animate-pulse"></div>
                }
                .into_any(),
                SessionState::SignedOut => view! {
                    <div class="flex items-center gap-2">
                        <A
                            href="/login"
                            attr:class="px-3 py-1.5 text-sm font-medium text-gray-600 hover:text-gray-900 transition-colors"
                        >
                            "Sign In"
                        </A>
                        <A
                            href="/register"
                            attr:class="px-3 py-1.5 text-sm font-medium text-black bg-yellow-300 hover:bg-yellow-400 rounded-lg transition-colors"
                        >
                            "Sign Up"
                        </A>
                    </div>
                }
                .into_any(),
                SessionState::SignedIn(user) => {
                    let paid = user.account_type.is_paid();
                    let plan = user.account_type.display_name();
                    let name = user.name.clone();
                    let email = user.email.clone();

                    view! {
                        <button
                            class="flex items-center gap-2 p-1 rounded-lg hover:bg-gray-100 transition-colors"
                            on:click=move |_| menu_open.update(|v| *v = !*v)
                        >
                            <UserAvatar user=user size=32 />
                            <div class="h-4 w-4" class=("rotate-180", move || menu_open.get())>
                                <Icon name=icons::CHEVRON_DOWN class="h-4 w-4" />
                            </div>
                        </button>

                        <Show when=move || menu_open.get()>
                            <div class="absolute right-0 mt-2 w-56 bg-white rounded-lg shadow-lg border border-gray-200 py-1 z-50">
                                <div class="px-4 py-3 border-b border-gray-200">
                                    <p class="text-sm font-medium text-gray-900 truncate">{name.clone()}</p>
                                    <p class="text-xs text-gray-500 truncate">{email.clone()}</p>
                                    <span class="inline-block mt-2 px-2 py-0.5 text-xs rounded-full bg-gray-100 text-gray-700">
                                        {plan} " plan"
                                    </span>
                                </div>

                                {(!paid).then(|| view! {
                                    <div class="py-1">
                                        <A
                                            href="/upgrade"
                                            attr:class="w-full px-4 py-2 text-sm text-left text-gray-900 hover:bg-gray-100 transition-colors flex items-center gap-2"
                                        >
                                            <Icon name=icons::SPARKLES class="h-4 w-4" />
                                            "Upgrade to Pro"
                                        </A>
                                    </div>
                                })}

                                <div class="border-t border-gray-200 my-1"></div>

                                <div class="py-1">
                                    <button
                                        class="w-full px-4 py-2 text-sm text-left text-red-500 hover:bg-red-50 transition-colors flex items-center gap-2"
                                        on:click=handle_logout
                                    >
                                        <Icon name=icons::LOGOUT class="h-4 w-4" />
                                        "Sign Out"
                                    </button>
                                </div>
                            </div>
                        </Show>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// User avatar component
#[component]
pub fn UserAvatar(
    user: User,
    /// Avatar size in pixels
    #[prop(default = 32)]
    size: u32,
) -> impl IntoView {
    let size_style = format!(
        "width: {}px; height: {}px; min-width: {}px; min-height: {}px;",
        size, size, size, size
    );
    let font_size = if size >= 40 { "text-lg" } else { "text-sm" };

    if let Some(avatar) = &user.avatar {
        view! {
            <img
                src=avatar.clone()
                alt=format!("{}'s avatar", user.name)
                class="rounded-full object-cover"
                style=size_style
            />
        }
        .into_any()
    } else {
        let color = avatar_color(&user.id);
        view! {
            <div
                class=format!("{} rounded-full flex items-center justify-center text-white font-medium {}", color, font_size)
                style=size_style
            >
                {user.initials()}
            </div>
        }
        .into_any()
    }
}

/// Stable background color picked from the user id
fn avatar_color(seed: &str) -> &'static str {
    const COLORS: [&str; 8] = [
        "bg-blue-500",
        "bg-green-500",
        "bg-yellow-500",
        "bg-red-500",
        "bg-purple-500",
        "bg-pink-500",
        "bg-indigo-500",
        "bg-teal-500",
    ];
    let hash = seed.bytes().fold(0u32, |acc, b| acc.wrapping_add(b as u32));
    COLORS[(hash as usize) % COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_color_is_stable() {
        assert_eq!(avatar_color("user-1"), avatar_color("user-1"));
        assert!(avatar_color("").starts_with("bg-"));
    }
}
