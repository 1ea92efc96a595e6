//! Identity-provider client: sessions, sign-in flows and token claims.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth store talks to the provider only through [`IdentityProvider`].
//! [`FirebaseIdentity`] implements it against the Identity Toolkit and Secure
//! Token REST APIs, and tests substitute an in-memory provider.
//!
//! DESIGN
//! ======
//! Sessions are owned here. A sign-in, sign-up, federated sign-in or sign-out
//! notifies every registered listener; a token refresh replaces the stored
//! session silently, since the user did not change. A newly registered
//! listener receives the restored session (from `localStorage`, refreshed if
//! expired) exactly once.
//!
//! Refresh and restore suspend on the network. Their result is written back
//! only if the stored session is still the one they started from, so a
//! sign-out or account switch made meanwhile always wins.
//!
//! ERROR HANDLING
//! ==============
//! Provider rejections keep the provider's message verbatim in
//! [`IdentityError::Provider`] so forms can show it unchanged. Outside the
//! browser every network operation reports [`IdentityError::Unavailable`].

#![allow(clippy::unused_async)]

#[path = "identity_listeners.rs"]
mod identity_listeners;
#[path = "identity_rest.rs"]
mod identity_rest;

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

#[cfg(any(test, feature = "hydrate"))]
use self::identity_listeners::lock;
pub use self::identity_listeners::{ListenerRegistry, SessionListener, Subscription};
#[cfg(feature = "hydrate")]
use self::identity_rest::{
    AuthResponse, LookupResponse, RefreshResponse, identity_endpoint, idp_request_body, network_error, post_json,
    read_response, refresh_endpoint, refresh_form, session_from_auth, session_from_refresh, user_from_lookup,
};
#[cfg(feature = "hydrate")]
use super::types::User;
use super::types::{Session, TokenClaims};
use crate::config::ClientConfig;

pub const IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const SECURE_TOKEN_URL: &str = "https://securetoken.googleapis.com/v1/token";
pub const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
/// Route the federated provider redirects back to.
pub const FEDERATED_CALLBACK_PATH: &str = "/auth/callback";

/// Failures reported by the identity provider client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The provider rejected the request; the message is shown verbatim.
    #[error("{0}")]
    Provider(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected provider response: {0}")]
    Decode(String),
    #[error("no active session")]
    NoSession,
    #[error("identity provider not configured: {0} is unset")]
    NotConfigured(&'static str),
    #[error("identity provider is only available in the browser")]
    Unavailable,
}

/// Operations the app needs from an identity provider.
#[async_trait(?Send)]
pub trait IdentityProvider: Send + Sync {
    /// Register a listener for session changes.
    fn on_session_change(&self, listener: SessionListener) -> Subscription;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, IdentityError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, IdentityError>;

    /// Leave the app for the federated provider's consent page.
    fn begin_federated_sign_in(&self) -> Result<(), IdentityError>;

    /// Exchange a federated id token for a provider session.
    async fn sign_in_with_federated_token(&self, id_token: &str) -> Result<Session, IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;

    /// Current id token, refreshed first when `force_refresh` is set or it expired.
    async fn id_token(&self, force_refresh: bool) -> Result<String, IdentityError>;

    /// Claims of the current id token.
    async fn claims(&self, force_refresh: bool) -> Result<TokenClaims, IdentityError> {
        decode_claims(&self.id_token(force_refresh).await?)
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError>;
}

/// Decode the (unverified) payload segment of a JWT id token.
///
/// # Errors
///
/// Returns [`IdentityError::Decode`] if the token is not a three-part JWT or
/// its payload is not base64url JSON.
pub fn decode_claims(id_token: &str) -> Result<TokenClaims, IdentityError> {
    let mut parts = id_token.split('.');
    let (Some(_), Some(payload), Some(_), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return Err(IdentityError::Decode("id token is not a JWT".to_owned()));
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| IdentityError::Decode(format!("id token payload: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| IdentityError::Decode(format!("id token claims: {e}")))
}

/// Extract the federated `id_token` from a redirect URL fragment.
///
/// # Errors
///
/// Returns [`IdentityError::Provider`] when the fragment carries an `error`
/// parameter and [`IdentityError::Decode`] when no token is present.
pub fn parse_callback_fragment(fragment: &str) -> Result<String, IdentityError> {
    let mut token = None;
    for pair in fragment.trim_start_matches('#').split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = urlencoding::decode(value).map_or_else(|_| value.to_owned(), |v| v.into_owned());
        match key {
            "error" => return Err(IdentityError::Provider(value)),
            "id_token" if !value.is_empty() => token = Some(value),
            _ => {}
        }
    }
    token.ok_or_else(|| IdentityError::Decode("callback is missing id_token".to_owned()))
}

/// Consent-page URL for the Google implicit id-token flow.
#[must_use]
pub fn google_authorize_url(client_id: &str, redirect_uri: &str, nonce: &str) -> String {
    format!(
        "{GOOGLE_AUTHORIZE_URL}?client_id={}&redirect_uri={}&response_type=id_token&scope={}&nonce={}&prompt=select_account",
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode("openid email profile"),
        urlencoding::encode(nonce),
    )
}

#[cfg(feature = "hydrate")]
fn browser_origin() -> Result<String, IdentityError> {
    web_sys::window()
        .ok_or(IdentityError::Unavailable)?
        .location()
        .origin()
        .map_err(|_| IdentityError::Unavailable)
}

/// Whether two stored sessions belong to the same sign-in.
#[cfg(any(test, feature = "hydrate"))]
fn same_session(a: Option<&Session>, b: Option<&Session>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.user.uid == b.user.uid && a.refresh_token == b.refresh_token,
        _ => false,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn persist(session: Option<&Session>) {
    match session {
        Some(session) => crate::util::storage::save_session(session),
        None => crate::util::storage::clear_session(),
    }
}

/// REST client for the hosted identity provider.
#[derive(Clone)]
pub struct FirebaseIdentity {
    config: ClientConfig,
    session: Arc<Mutex<Option<Session>>>,
    restored: Arc<Mutex<bool>>,
    listeners: ListenerRegistry,
}

impl FirebaseIdentity {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            session: Arc::new(Mutex::new(None)),
            restored: Arc::new(Mutex::new(false)),
            listeners: ListenerRegistry::default(),
        }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn api_key(&self) -> Result<&str, IdentityError> {
        if self.config.firebase_api_key.is_empty() {
            return Err(IdentityError::NotConfigured("PARTYN_FIREBASE_API_KEY"));
        }
        Ok(&self.config.firebase_api_key)
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn current(&self) -> Option<Session> {
        lock(&self.session).clone()
    }

    /// Replace the stored session without notifying listeners.
    #[cfg(any(test, feature = "hydrate"))]
    fn store(&self, session: Option<Session>) {
        let mut current = lock(&self.session);
        persist(session.as_ref());
        *current = session;
    }

    /// Replace the stored session with `next` only while it still matches
    /// `expected`. Returns `false` and stores nothing otherwise.
    #[cfg(any(test, feature = "hydrate"))]
    fn replace_if_current(&self, expected: Option<&Session>, next: Option<Session>) -> bool {
        let mut current = lock(&self.session);
        if !same_session(current.as_ref(), expected) {
            return false;
        }
        persist(next.as_ref());
        *current = next;
        true
    }

    /// Store `session` and tell every listener about it.
    #[cfg(any(test, feature = "hydrate"))]
    fn establish(&self, session: Option<Session>) {
        self.store(session.clone());
        self.listeners.notify(session.as_ref());
    }

    #[cfg(feature = "hydrate")]
    async fn refresh(&self, session: &Session) -> Result<Session, IdentityError> {
        let response = gloo_net::http::Request::post(&refresh_endpoint(self.api_key()?))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(refresh_form(&session.refresh_token))
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        let refreshed: RefreshResponse = read_response(response).await?;
        session_from_refresh(session, refreshed, crate::util::time::now_ms())
    }

    #[cfg(feature = "hydrate")]
    async fn lookup(&self, id_token: &str) -> Result<Option<User>, IdentityError> {
        let response: LookupResponse =
            post_json(&identity_endpoint("lookup", self.api_key()?), &serde_json::json!({ "idToken": id_token })).await?;
        Ok(user_from_lookup(response))
    }

    /// Load the persisted session once, refreshing it when expired.
    #[cfg(feature = "hydrate")]
    async fn restore(&self) -> Option<Session> {
        {
            let mut restored = lock(&self.restored);
            if *restored {
                return self.current();
            }
            *restored = true;
        }
        if let Some(session) = self.current() {
            return Some(session);
        }
        let stored = crate::util::storage::load_session()?;
        let mut session = if stored.is_expired(crate::util::time::now_ms()) {
            match self.refresh(&stored).await {
                Ok(session) => session,
                Err(e) => {
                    leptos::logging::warn!("session restore failed: {e}");
                    self.replace_if_current(None, None);
                    return self.current();
                }
            }
        } else {
            stored
        };
        match self.lookup(&session.id_token).await {
            Ok(Some(user)) => session.user = user,
            Ok(None) => {}
            Err(e) => leptos::logging::warn!("user lookup failed: {e}"),
        }
        if self.replace_if_current(None, Some(session.clone())) {
            Some(session)
        } else {
            self.current()
        }
    }

    #[cfg(feature = "hydrate")]
    async fn sign_in_with(&self, method: &str, body: serde_json::Value) -> Result<Session, IdentityError> {
        let response: AuthResponse = post_json(&identity_endpoint(method, self.api_key()?), &body).await?;
        let session = session_from_auth(response, crate::util::time::now_ms())?;
        self.establish(Some(session.clone()));
        Ok(session)
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseIdentity {
    fn on_session_change(&self, listener: SessionListener) -> Subscription {
        let (id, subscription) = self.listeners.register(listener);
        #[cfg(feature = "hydrate")]
        {
            let this = self.clone();
            leptos::task::spawn_local(async move {
                let session = this.restore().await;
                this.listeners.deliver(id, session);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
        subscription
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "email": email, "password": password, "returnSecureToken": true });
            self.sign_in_with("signInWithPassword", body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(IdentityError::Unavailable)
        }
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "email": email, "password": password, "returnSecureToken": true });
            self.sign_in_with("signUp", body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(IdentityError::Unavailable)
        }
    }

    fn begin_federated_sign_in(&self) -> Result<(), IdentityError> {
        let client_id = self
            .config
            .google_client_id
            .as_deref()
            .ok_or(IdentityError::NotConfigured("PARTYN_GOOGLE_CLIENT_ID"))?;
        #[cfg(feature = "hydrate")]
        {
            let redirect_uri = format!("{}{FEDERATED_CALLBACK_PATH}", browser_origin()?);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let nonce = format!("{:x}", (js_sys::Math::random() * 1e15) as u64);
            let url = google_authorize_url(client_id, &redirect_uri, &nonce);
            web_sys::window()
                .ok_or(IdentityError::Unavailable)?
                .location()
                .set_href(&url)
                .map_err(|_| IdentityError::Network("could not open the sign-in page".to_owned()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = client_id;
            Err(IdentityError::Unavailable)
        }
    }

    async fn sign_in_with_federated_token(&self, id_token: &str) -> Result<Session, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let body = idp_request_body(id_token, &browser_origin()?);
            self.sign_in_with("signInWithIdp", body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id_token;
            Err(IdentityError::Unavailable)
        }
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            self.establish(None);
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(IdentityError::Unavailable)
        }
    }

    async fn id_token(&self, force_refresh: bool) -> Result<String, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let session = self.current().ok_or(IdentityError::NoSession)?;
            if !force_refresh && !session.is_expired(crate::util::time::now_ms()) {
                return Ok(session.id_token);
            }
            let refreshed = self.refresh(&session).await?;
            let token = refreshed.id_token.clone();
            if !self.replace_if_current(Some(&session), Some(refreshed)) {
                return Err(IdentityError::NoSession);
            }
            Ok(token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = force_refresh;
            Err(IdentityError::Unavailable)
        }
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "requestType": "PASSWORD_RESET", "email": email });
            let _: serde_json::Value = post_json(&identity_endpoint("sendOobCode", self.api_key()?), &body).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
            Err(IdentityError::Unavailable)
        }
    }
}
