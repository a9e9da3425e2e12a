use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{LandingPage, LoginPage, NotFoundPage, RegisterPage, UpgradePage};
use crate::ui::{NotificationManager, NotificationsContainer, SessionContext};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // One session per UI process, handed to each page explicitly
    let session = SessionContext::new();
    let notifications = NotificationManager::new();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/smartjects.css"/>

        <Title text="Smartjects"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=move || view! { <LandingPage session=session/> }/>
                <Route
                    path=path!("/login")
                    view=move || view! { <LoginPage session=session notifications=notifications/> }
                />
                <Route
                    path=path!("/register")
                    view=move || view! { <RegisterPage session=session notifications=notifications/> }
                />
                <Route
                    path=path!("/upgrade")
                    view=move || view! { <UpgradePage session=session notifications=notifications/> }
                />
            </Routes>
        </Router>

        <NotificationsContainer manager=notifications/>
    }
}
