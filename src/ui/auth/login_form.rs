//! Login form component
//!
//! Email and password sign-in against the session's backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::validation::{validate_email, validate_login_password};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::SessionContext;

/// Login form component
#[component]
pub fn LoginForm(
    session: SessionContext,
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to register form
    #[prop(optional, into)]
    on_register_click: Option<Callback<()>>,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let check_email = move || {
        let result = validate_email(&email.get());
        email_error.set(result.as_ref().err().map(ToString::to_string));
        result.is_ok()
    };

    let check_password = move || {
        let result = validate_login_password(&password.get());
        password_error.set(result.as_ref().err().map(ToString::to_string));
        result.is_ok()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.clear_error();

        // Validate both so both errors show at once
        let email_valid = check_email();
        let password_valid = check_password();
        if !email_valid || !password_valid {
            return;
        }

        let email_val = email.get().trim().to_string();
        let password_val = password.get();

        spawn_local(async move {
            // Failures land in session.error
            if session.login(email_val, password_val).await.is_ok() {
                if let Some(callback) = on_success {
                    callback.run(());
                }
            }
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-white rounded-xl shadow-lg p-6 border border-gray-200">
            <form on:submit=on_submit class="space-y-6">
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-gray-900">"Welcome Back"</h2>
                    <p class="mt-2 text-sm text-gray-600">
                        "Sign in to discover and join Smartjects"
                    </p>
                </div>

                {move || {
                    session.error.get().map(|error| {
                        view! {
                            <div class="p-3 bg-red-100 border border-red-300 rounded-lg">
                                <p class="text-sm text-red-700">{error}</p>
                            </div>
                        }
                    })
                }}

                <div>
                    <label for="email" class="block text-sm font-medium text-gray-900 mb-1">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg
                               focus:outline-none focus:ring-2 focus:ring-yellow-400 focus:border-transparent
                               transition-colors"
                        class:border-red-500=move || email_error.get().is_some()
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            email_error.set(None);
                        }
                        on:blur=move |_| { check_email(); }
                    />
                    {move || {
                        email_error.get().map(|error| {
                            view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                        })
                    }}
                </div>

                <div>
                    <label for="password" class="block text-sm font-medium text-gray-900 mb-1">
                        "Password"
                    </label>
                    <div class="relative">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            placeholder="Enter your password"
                            class="w-full px-3 py-2 pr-10 border border-gray-300 rounded-lg
                                   focus:outline-none focus:ring-2 focus:ring-yellow-400 focus:border-transparent
                                   transition-colors"
                            class:border-red-500=move || password_error.get().is_some()
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                password_error.set(None);
                            }
                            on:blur=move |_| { check_password(); }
                        />
                        <button
                            type="button"
                            class="absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400 hover:text-gray-600"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || {
                                if show_password.get() {
                                    view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                                } else {
                                    view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                    {move || {
                        password_error.get().map(|error| {
                            view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                        })
                    }}
                </div>

                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-yellow-300 hover:bg-yellow-400
                           text-black font-medium rounded-lg
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                    disabled=move || session.loading.get()
                >
                    {move || {
                        if session.loading.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                                    "Signing in..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span class="block">"Sign In"</span> }.into_any()
                        }
                    }}
                </button>

                <div class="text-center text-sm text-gray-600">
                    "Don't have an account? "
                    <button
                        type="button"
                        class="text-gray-900 underline hover:text-black font-medium"
                        on:click=move |_| {
                            if let Some(callback) = on_register_click {
                                callback.run(());
                            }
                        }
                    >
                        "Sign up"
                    </button>
                </div>
            </form>
        </div>
    }
}
