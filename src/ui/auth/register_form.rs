//! Register form component
//!
//! Sign-up with display name, email and password. New accounts start on
//! the free tier.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::validation::{
    FieldError, validate_email, validate_name, validate_new_password,
    validate_password_confirmation,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::SessionContext;

/// Text input with label and inline error
#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    error: RwSignal<Option<String>>,
    validate: Callback<(), bool>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-900 mb-1">{label}</label>
            <input
                type=input_type
                id=id
                name=id
                autocomplete=autocomplete
                placeholder=placeholder
                class="w-full px-3 py-2 border border-gray-300 rounded-lg
                       focus:outline-none focus:ring-2 focus:ring-yellow-400 focus:border-transparent
                       transition-colors"
                class:border-red-500=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    error.set(None);
                }
                on:blur=move |_| { validate.run(()); }
            />
            {move || {
                error.get().map(|error| {
                    view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                })
            }}
        </div>
    }
}

/// Write a validation outcome into its error signal
fn apply(error: RwSignal<Option<String>>, result: Result<(), FieldError>) -> bool {
    error.set(result.as_ref().err().map(ToString::to_string));
    result.is_ok()
}

/// Register form component
#[component]
pub fn RegisterForm(
    session: SessionContext,
    /// Callback when registration is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to login form
    #[prop(optional, into)]
    on_login_click: Option<Callback<()>>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);

    let check_name = Callback::new(move |()| apply(name_error, validate_name(&name.get())));
    let check_email = Callback::new(move |()| apply(email_error, validate_email(&email.get())));
    let check_password = Callback::new(move |()| {
        apply(password_error, validate_new_password(&password.get()))
    });
    let check_confirm = Callback::new(move |()| {
        apply(
            confirm_error,
            validate_password_confirmation(&password.get(), &confirm_password.get()),
        )
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.clear_error();

        let checks = [
            check_name.run(()),
            check_email.run(()),
            check_password.run(()),
            check_confirm.run(()),
        ];
        if checks.contains(&false) {
            return;
        }

        let name_val = name.get().trim().to_string();
        let email_val = email.get().trim().to_string();
        let password_val = password.get();

        spawn_local(async move {
            if session
                .register(name_val, email_val, password_val)
                .await
                .is_ok()
            {
                if let Some(callback) = on_success {
                    callback.run(());
                }
            }
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-white rounded-xl shadow-lg p-6 border border-gray-200">
            <form on:submit=on_submit class="space-y-5">
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-gray-900">"Create Account"</h2>
                    <p class="mt-2 text-sm text-gray-600">
                        "Join Smartjects and start matching with projects"
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

                <Field
                    id="name"
                    label="Name"
                    input_type="text"
                    autocomplete="name"
                    placeholder="Your name"
                    value=name
                    error=name_error
                    validate=check_name
                />
                <Field
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    value=email
                    error=email_error
                    validate=check_email
                />
                <Field
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
                    placeholder="At least 8 characters"
                    value=password
                    error=password_error
                    validate=check_password
                />
                <Field
                    id="confirm-password"
                    label="Confirm Password"
                    input_type="password"
                    autocomplete="new-password"
                    placeholder="Repeat your password"
                    value=confirm_password
                    error=confirm_error
                    validate=check_confirm
                />

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
                                    "Creating account..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span class="block">"Sign Up"</span> }.into_any()
                        }
                    }}
                </button>

                <div class="text-center text-sm text-gray-600">
                    "Already have an account? "
                    <button
                        type="button"
                        class="text-gray-900 underline hover:text-black font-medium"
                        on:click=move |_| {
                            if let Some(callback) = on_login_click {
                                callback.run(());
                            }
                        }
                    >
                        "Sign in"
                    </button>
                </div>
            </form>
        </div>
    }
}
