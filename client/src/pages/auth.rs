//! Log-in, sign-up and password-reset page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/auth?mode=login|signup|reset`. Successful sign-in or sign-up
//! navigates home; the session itself reaches the store through the provider
//! notification, not through this page.
//!
//! ERROR HANDLING
//! ==============
//! Provider errors are displayed verbatim. Local validation failures use the
//! fixed messages below.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::auth_store::AuthStore;
use crate::util::navigation::install_navigation_request;

pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const MISSING_CREDENTIALS: &str = "Enter your email and password.";
pub const MISSING_EMAIL: &str = "Enter your email first.";
pub const RESET_SENT: &str = "Password reset email sent. Check your inbox.";

/// Which form the auth page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
    Reset,
}

impl AuthMode {
    /// Parse the `mode` query value; anything unknown means log in.
    #[must_use]
    pub fn from_query(mode: Option<&str>) -> Self {
        match mode {
            Some("signup") => Self::Signup,
            Some("reset") => Self::Reset,
            _ => Self::Login,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Log In",
            Self::Signup => "Sign Up",
            Self::Reset => "Reset Password",
        }
    }
}

/// Validated form input for one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Check the form for `mode` and return trimmed credentials.
///
/// # Errors
///
/// Returns the message to show when a field is missing or the sign-up
/// confirmation does not match.
pub fn validate_credentials(
    mode: AuthMode,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if mode == AuthMode::Reset {
        if email.is_empty() {
            return Err(MISSING_EMAIL);
        }
        return Ok(Credentials { email: email.to_owned(), password: String::new() });
    }
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    if mode == AuthMode::Signup && password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let query = use_query_map();
    let mode = Memo::new(move |_| AuthMode::from_query(query.with(|q| q.get("mode")).as_deref()));
    let navigate_to = install_navigation_request();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    // Switching between modes starts from a clean form.
    Effect::new(move || {
        mode.track();
        error.set(None);
        notice.set(None);
        confirm.set(String::new());
    });

    let submit_store = store.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let mode = mode.get_untracked();
        let credentials = match validate_credentials(
            mode,
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        notice.set(None);
        busy.set(true);
        let store = submit_store.clone();
        leptos::task::spawn_local(async move {
            let result = match mode {
                AuthMode::Login => store.login(&credentials.email, &credentials.password).await,
                AuthMode::Signup => store.signup(&credentials.email, &credentials.password).await,
                AuthMode::Reset => store.send_password_reset(&credentials.email).await,
            };
            busy.set(false);
            match result {
                Ok(()) if mode == AuthMode::Reset => notice.set(Some(RESET_SENT)),
                Ok(()) => navigate_to.set(Some("/".to_owned())),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let on_google = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = store.login_with_federated_provider() {
            error.set(Some(e.to_string()));
        }
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">{move || mode.get().title()}</h1>
                <nav class="auth-card__tabs">
                    <a href="/auth?mode=login" class:auth-card__tab--active=move || mode.get() == AuthMode::Login>
                        "Log In"
                    </a>
                    <a href="/auth?mode=signup" class:auth-card__tab--active=move || mode.get() == AuthMode::Signup>
                        "Sign Up"
                    </a>
                </nav>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || notice.get().is_some()>
                    <p class="auth-card__notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || mode.get() != AuthMode::Reset>
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </Show>
                    <Show when=move || mode.get() == AuthMode::Signup>
                        <label for="confirmPassword">"Confirm Password"</label>
                        <input
                            id="confirmPassword"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </Show>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || match mode.get() {
                            AuthMode::Login => "Log In",
                            AuthMode::Signup => "Create Account",
                            AuthMode::Reset => "Send password reset email",
                        }}
                    </button>
                </form>
                <Show when=move || mode.get() != AuthMode::Reset>
                    <button class="auth-card__google" on:click=on_google.clone()>
                        "Continue with Google"
                    </button>
                    <a class="auth-card__reset" href="/auth?mode=reset">"Forgot your password?"</a>
                </Show>
            </div>
        </section>
    }
}
