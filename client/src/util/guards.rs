//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guard components evaluate these against the current auth state on every
//! change; keeping them pure lets every access rule be tested without a DOM.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use crate::state::auth::AuthState;

/// Where signed-out visitors are sent.
pub const LOGIN_PATH: &str = "/auth?mode=login";
/// Where unprivileged visitors (and unmatched routes) are sent.
pub const HOME_PATH: &str = "/";

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth state is not settled yet; render a placeholder.
    Wait,
    Allow,
    Redirect(&'static str),
}

/// Allow any signed-in user.
#[must_use]
pub fn require_authenticated(state: &AuthState) -> GuardDecision {
    if !state.is_settled() {
        return GuardDecision::Wait;
    }
    if state.user.is_none() {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    GuardDecision::Allow
}

/// Allow only signed-in users holding the privilege claim.
#[must_use]
pub fn require_privileged(state: &AuthState) -> GuardDecision {
    if !state.is_settled() {
        return GuardDecision::Wait;
    }
    if state.user.is_none() || !state.is_privileged {
        return GuardDecision::Redirect(HOME_PATH);
    }
    GuardDecision::Allow
}
