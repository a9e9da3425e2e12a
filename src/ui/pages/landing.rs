//! Landing page component
//!
//! Marketing entry point: hero with a call to action that depends on the
//! session, and a short "how it works" strip.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::ui::layout::{SiteFooter, SiteHeader};
use crate::ui::session::SessionContext;

#[component]
pub fn LandingPage(session: SessionContext) -> impl IntoView {
    view! {
        <Title text="Smartjects - Match AI project ideas with the teams that build them" />
        <Meta
            name="description"
            content="Smartjects connects companies, researchers and builders around AI project ideas."
        />

        <div class="min-h-screen bg-white flex flex-col">
            <SiteHeader session=session />

            <section class="flex-1 flex items-center justify-center px-4 py-24">
                <div class="text-center max-w-3xl mx-auto">
                    <h1 class="text-5xl sm:text-6xl font-bold text-gray-900 mb-6 tracking-tight">
                        "Turn research into real projects"
                    </h1>
                    <p class="text-xl text-gray-600 mb-10 leading-relaxed">
                        "Smartjects matches AI project ideas with the companies that need them and the teams that can build them."
                    </p>

                    {move || match session.user() {
                        Some(user) => view! {
                            <p class="text-lg text-gray-900">
                                "Welcome back, " <span class="font-semibold">{user.name}</span>
                            </p>
                        }
                        .into_any(),
                        None => view! {
                            <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                                <A
                                    href="/register"
                                    attr:class="px-6 py-3 bg-yellow-300 hover:bg-yellow-400 text-black font-medium rounded-lg transition-colors"
                                >
                                    "Get Started"
                                </A>
                                <A
                                    href="/login"
                                    attr:class="px-6 py-3 border border-gray-300 text-gray-900 hover:bg-gray-50 font-medium rounded-lg transition-colors"
                                >
                                    "Sign In"
                                </A>
                            </div>
                        }
                        .into_any(),
                    }}
                </div>
            </section>

            <section class="bg-gray-50 py-16 px-4">
                <div class="max-w-5xl mx-auto grid gap-6 sm:grid-cols-3">
                    <Step number=1 title="Discover" description="Browse smartjects distilled from the latest research." />
                    <Step number=2 title="Match" description="Signal whether you need, believe in or can provide a project." />
                    <Step number=3 title="Build" description="Meet the teams and turn the idea into a product." />
                </div>
            </section>

            <SiteFooter />
        </div>
    }
}

#[component]
fn Step(number: u8, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-xl border border-gray-200">
            <div class="w-10 h-10 rounded-full bg-yellow-300 flex items-center justify-center font-bold mb-4">
                {number}
            </div>
            <h3 class="text-lg font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600 text-sm leading-relaxed">{description}</p>
        </div>
    }
}
