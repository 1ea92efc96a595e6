use super::*;
use crate::net::types::User;

fn user() -> User {
    User { uid: "u1".to_owned(), display_name: None, email: Some("u1@partyn.test".to_owned()), photo_url: None }
}

fn settled(privileged: Option<bool>) -> AuthState {
    let mut state = AuthState::default();
    match privileged {
        Some(granted) => {
            let epoch = state.session_started(user());
            state.privilege_resolved(epoch, granted);
        }
        None => state.signed_out(),
    }
    state
}

#[test]
fn guards_wait_while_initializing() {
    let state = AuthState::default();
    assert_eq!(require_authenticated(&state), GuardDecision::Wait);
    assert_eq!(require_privileged(&state), GuardDecision::Wait);
}

#[test]
fn guards_wait_while_privilege_pending() {
    let mut state = AuthState::default();
    state.session_started(user());
    assert_eq!(require_authenticated(&state), GuardDecision::Wait);
    assert_eq!(require_privileged(&state), GuardDecision::Wait);
}

#[test]
fn authenticated_guard_redirects_signed_out_to_login() {
    assert_eq!(require_authenticated(&settled(None)), GuardDecision::Redirect("/auth?mode=login"));
}

#[test]
fn authenticated_guard_allows_any_user() {
    assert_eq!(require_authenticated(&settled(Some(false))), GuardDecision::Allow);
    assert_eq!(require_authenticated(&settled(Some(true))), GuardDecision::Allow);
}

#[test]
fn privileged_guard_redirects_unprivileged_user_home() {
    assert_eq!(require_privileged(&settled(Some(false))), GuardDecision::Redirect("/"));
}

#[test]
fn privileged_guard_redirects_signed_out_home() {
    assert_eq!(require_privileged(&settled(None)), GuardDecision::Redirect("/"));
}

#[test]
fn privileged_guard_allows_privileged_user() {
    assert_eq!(require_privileged(&settled(Some(true))), GuardDecision::Allow);
}
