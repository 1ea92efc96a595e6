//! Reactive auth store shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once by the app root, which also owns the provider subscription.
//! Pages and guards read [`AuthStore::state`]; auth forms call the sign-in
//! operations, and backend calls borrow [`AuthStore::id_token`].
//!
//! DESIGN
//! ======
//! The store never sets `user` itself after a sign-in. The provider notifies
//! the subscribed listener, which applies the session and schedules the
//! privilege lookup. Sign-out is the exception: state is cleared before the
//! provider call is even started.

#[cfg(test)]
#[path = "auth_store_test.rs"]
mod auth_store_test;

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;

use super::auth::AuthState;
use crate::net::identity::{IdentityError, IdentityProvider, Subscription};
use crate::net::types::Session;

/// Ticket for resolving the privilege of one specific session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrivilegeRequest {
    epoch: u64,
}

/// Auth state signal plus the identity provider that drives it.
#[derive(Clone)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
    identity: Arc<dyn IdentityProvider>,
}

impl AuthStore {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { state: RwSignal::new(AuthState::default()), identity }
    }

    /// Read handle for views and guards.
    #[must_use]
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// Listen for provider session changes until the handle is dropped.
    pub fn subscribe(&self) -> Subscription {
        let store = self.clone();
        self.identity.on_session_change(Arc::new(move |session| {
            if let Some(request) = store.apply_session(session) {
                let store = store.clone();
                leptos::task::spawn_local(async move {
                    store.resolve_privilege(request).await;
                });
            }
        }))
    }

    /// Apply a session-change notification.
    ///
    /// Returns the privilege lookup to run when a session is present.
    pub fn apply_session(&self, session: Option<Session>) -> Option<PrivilegeRequest> {
        self.state
            .try_update(|state| match session {
                Some(session) => Some(PrivilegeRequest { epoch: state.session_started(session.user) }),
                None => {
                    state.signed_out();
                    None
                }
            })
            .flatten()
    }

    /// Force a token refresh and apply the `admin` claim for `request`.
    ///
    /// Returns whether the result was applied (it is dropped when a newer
    /// session arrived meanwhile).
    pub async fn resolve_privilege(&self, request: PrivilegeRequest) -> bool {
        let granted = match self.identity.claims(true).await {
            Ok(claims) => claims.is_admin(),
            Err(e) => {
                leptos::logging::warn!("privilege lookup failed: {e}");
                false
            }
        };
        self.state.try_update(|state| state.privilege_resolved(request.epoch, granted)).unwrap_or(false)
    }

    /// # Errors
    ///
    /// Returns the provider's error unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), IdentityError> {
        self.identity.sign_in_with_password(email, password).await.map(|_| ())
    }

    /// # Errors
    ///
    /// Returns the provider's error unchanged.
    pub async fn signup(&self, email: &str, password: &str) -> Result<(), IdentityError> {
        self.identity.sign_up(email, password).await.map(|_| ())
    }

    /// Start the federated sign-in redirect.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::NotConfigured`] when no OAuth client id is set.
    pub fn login_with_federated_provider(&self) -> Result<(), IdentityError> {
        self.identity.begin_federated_sign_in()
    }

    /// Finish federated sign-in with the id token from the callback URL.
    ///
    /// # Errors
    ///
    /// Returns the provider's error unchanged.
    pub async fn complete_federated_sign_in(&self, id_token: &str) -> Result<(), IdentityError> {
        self.identity.sign_in_with_federated_token(id_token).await.map(|_| ())
    }

    /// # Errors
    ///
    /// Returns the provider's error unchanged.
    pub async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError> {
        self.identity.send_password_reset(email).await
    }

    /// Clear the session locally, then sign out at the provider.
    ///
    /// `user` and `is_privileged` are already cleared when this returns.
    pub fn logout(&self) -> impl Future<Output = Result<(), IdentityError>> + 'static {
        self.state.try_update(AuthState::signed_out);
        let identity = Arc::clone(&self.identity);
        async move { identity.sign_out().await }
    }

    /// Bearer token for backend calls.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::NoSession`] when nobody is signed in.
    pub async fn id_token(&self, force_refresh: bool) -> Result<String, IdentityError> {
        self.identity.id_token(force_refresh).await
    }
}
