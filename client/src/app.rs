//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the identity provider and auth store once, provides them as
//! context, and owns the provider subscription for the lifetime of the app.
//! Routes are always mounted so the host can list them; components that depend
//! on the session render a placeholder until the first notification arrives.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::guards::{RequireAuth, RequirePrivileged};
use crate::components::header::Header;
use crate::config::ClientConfig;
use crate::net::identity::FirebaseIdentity;
use crate::pages::{
    admin::AdminPage, auth::AuthPage, auth_callback::AuthCallbackPage, contact::ContactPage, events::EventsPage,
    locations::LocationsPage, profile::ProfilePage,
};
use crate::state::auth_store::AuthStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store = AuthStore::new(Arc::new(FirebaseIdentity::new(config.clone())));
    let subscription = store.subscribe();
    on_cleanup(move || drop(subscription));

    provide_context(config);
    provide_context(store);

    view! {
        <Stylesheet id="leptos" href="/pkg/partyn.css"/>
        <Title text="Partyn"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("") view=EventsPage/>
                    <Route path=StaticSegment("locations") view=LocationsPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("auth") view=AuthPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <RequirePrivileged><AdminPage/></RequirePrivileged> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
