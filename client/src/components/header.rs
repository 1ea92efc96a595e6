//! Site header with navigation and account controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every route. Reads the auth store for the account area and
//! leaves the account area empty until the first session notification. The
//! admin link appears only once privilege is settled.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth_store::AuthStore;
use crate::util::color::{avatar_color, avatar_initial};
use crate::util::navigation::install_navigation_request;
use crate::util::routes::{AppRoute, NAV_ROUTES, nav_link_class};

#[component]
pub fn Header() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let auth = store.state();
    let pathname = use_location().pathname;
    let navigate_to = install_navigation_request();
    let menu_open = RwSignal::new(false);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let pending = store.logout();
        menu_open.set(false);
        navigate_to.set(Some(AppRoute::Events.path().to_owned()));
        leptos::task::spawn_local(async move {
            if let Err(e) = pending.await {
                leptos::logging::warn!("sign-out failed: {e}");
            }
        });
    };

    let nav_links = NAV_ROUTES
        .iter()
        .map(|&route| {
            view! {
                <a
                    class=move || nav_link_class(&pathname.get(), route)
                    href=route.path()
                    on:click=move |_| menu_open.set(false)
                >
                    {route.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <nav class="site-header__nav" class:site-header__nav--open=move || menu_open.get()>
                <a class="site-header__logo" href="/">"Partyn"</a>
                <button
                    class="site-header__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <div class="site-header__links">
                    {nav_links}
                    <Show when=move || auth.get().shows_admin()>
                        <a
                            class=move || nav_link_class(&pathname.get(), AppRoute::Admin)
                            href=AppRoute::Admin.path()
                            on:click=move |_| menu_open.set(false)
                        >
                            {AppRoute::Admin.label()}
                        </a>
                    </Show>
                </div>
                <div class="site-header__account">
                    <Show
                        when=move || auth.with(|state| state.user.is_some())
                        fallback=move || {
                            view! {
                                <Show when=move || !auth.with(|state| state.initializing)>
                                    <a class="site-header__button" href="/auth?mode=login">"Log In"</a>
                                    <a
                                        class="site-header__button site-header__button--primary"
                                        href="/auth?mode=signup"
                                    >
                                        "Sign Up"
                                    </a>
                                </Show>
                            }
                        }
                    >
                        <a class="site-header__avatar" href=AppRoute::Profile.path() aria-label="Profile">
                            {move || avatar(auth.with(|state| state.user.clone()))}
                        </a>
                        <button class="site-header__button" on:click=on_logout.clone()>"Log Out"</button>
                    </Show>
                </div>
            </nav>
        </header>
    }
}

fn avatar(user: Option<crate::net::types::User>) -> AnyView {
    let Some(user) = user else {
        return ().into_any();
    };
    match user.photo_url {
        Some(url) => view! { <img class="avatar" src=url alt="Profile" /> }.into_any(),
        None => {
            let email = user.email.unwrap_or_default();
            let style = format!("background-color: {}", avatar_color(&email));
            view! { <span class="avatar avatar--initial" style=style>{avatar_initial(Some(&email))}</span> }
                .into_any()
        }
    }
}
