//! Landing route for the federated sign-in redirect.
//!
//! The provider appends `#id_token=...` to `/auth/callback`. This page trades
//! that token for a session and then goes home, or shows why it could not.

use leptos::prelude::*;

use crate::state::auth_store::AuthStore;
use crate::util::navigation::install_navigation_request;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let navigate_to = install_navigation_request();
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let fragment = web_sys::window().and_then(|w| w.location().hash().ok()).unwrap_or_default();
        match crate::net::identity::parse_callback_fragment(&fragment) {
            Ok(id_token) => {
                leptos::task::spawn_local(async move {
                    match store.complete_federated_sign_in(&id_token).await {
                        Ok(()) => navigate_to.set(Some("/".to_owned())),
                        Err(e) => {
                            leptos::logging::warn!("federated sign-in failed: {e}");
                            error.set(Some(e.to_string()));
                        }
                    }
                });
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, navigate_to);
    }

    view! {
        <section class="auth-page">
            <div class="auth-card">
                {move || match error.get() {
                    Some(message) => {
                        view! {
                            <p class="auth-card__error">{message}</p>
                            <a class="auth-card__reset" href="/auth?mode=login">"Back to log in"</a>
                        }
                            .into_any()
                    }
                    None => view! { <p class="auth-card__notice">"Signing you in..."</p> }.into_any(),
                }}
            </div>
        </section>
    }
}
