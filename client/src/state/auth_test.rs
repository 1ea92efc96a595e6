use super::*;

fn user(uid: &str) -> User {
    User {
        uid: uid.to_owned(),
        display_name: Some("Mari".to_owned()),
        email: Some(format!("{uid}@partyn.test")),
        photo_url: None,
    }
}

#[test]
fn default_state_is_initializing_without_privilege() {
    let state = AuthState::default();
    assert!(state.initializing);
    assert!(state.user.is_none());
    assert!(!state.is_privileged);
    assert!(!state.is_settled());
}

#[test]
fn session_started_marks_privilege_pending() {
    let mut state = AuthState::default();
    let epoch = state.session_started(user("u1"));
    assert!(!state.initializing);
    assert_eq!(state.privilege, PrivilegeStatus::Pending(epoch));
    assert!(!state.is_privileged);
    assert!(!state.is_settled());
}

#[test]
fn privilege_resolution_settles_state() {
    let mut state = AuthState::default();
    let epoch = state.session_started(user("u1"));
    assert!(state.privilege_resolved(epoch, true));
    assert!(state.is_settled());
    assert!(state.is_privileged);
    assert!(state.shows_admin());
}

#[test]
fn stale_resolution_from_previous_session_is_ignored() {
    let mut state = AuthState::default();
    let first = state.session_started(user("admin"));
    let second = state.session_started(user("guest"));
    assert!(!state.privilege_resolved(first, true));
    assert!(!state.is_privileged);
    assert_eq!(state.privilege, PrivilegeStatus::Pending(second));
    assert!(state.privilege_resolved(second, false));
    assert!(!state.is_privileged);
}

#[test]
fn resolution_after_sign_out_is_ignored() {
    let mut state = AuthState::default();
    let epoch = state.session_started(user("admin"));
    state.signed_out();
    assert!(!state.privilege_resolved(epoch, true));
    assert!(state.user.is_none());
    assert!(!state.is_privileged);
    assert!(state.is_settled());
}

#[test]
fn signed_out_clears_user_and_privilege_together() {
    let mut state = AuthState::default();
    let epoch = state.session_started(user("admin"));
    state.privilege_resolved(epoch, true);
    state.signed_out();
    assert!(state.user.is_none());
    assert!(!state.is_privileged);
    assert!(!state.shows_admin());
}

#[test]
fn new_session_does_not_inherit_previous_privilege() {
    let mut state = AuthState::default();
    let epoch = state.session_started(user("admin"));
    state.privilege_resolved(epoch, true);
    state.session_started(user("guest"));
    assert!(!state.is_privileged);
}

#[derive(Clone, Copy, Debug)]
enum Step {
    Start(usize),
    SignOut,
    Resolve { back: u64, granted: bool },
}

const STEPS: [Step; 7] = [
    Step::Start(0),
    Step::Start(1),
    Step::SignOut,
    Step::Resolve { back: 0, granted: true },
    Step::Resolve { back: 0, granted: false },
    Step::Resolve { back: 1, granted: true },
    Step::Resolve { back: 2, granted: true },
];

fn apply(state: &mut AuthState, latest: &mut u64, step: Step) {
    match step {
        Step::Start(n) => *latest = state.session_started(user(&format!("u{n}"))),
        Step::SignOut => state.signed_out(),
        Step::Resolve { back, granted } => {
            state.privilege_resolved(latest.saturating_sub(back), granted);
        }
    }
}

#[test]
fn privilege_is_never_set_without_a_user_for_any_sequence() {
    let len = 5;
    let total = STEPS.len().pow(len);
    for mut code in 0..total {
        let mut state = AuthState::default();
        let mut latest = 0;
        let mut trace = Vec::new();
        for _ in 0..len {
            let step = STEPS[code % STEPS.len()];
            code /= STEPS.len();
            trace.push(step);
            apply(&mut state, &mut latest, step);
            if state.user.is_none() {
                assert!(!state.is_privileged, "privileged without user after {trace:?}");
            }
            if matches!(state.privilege, PrivilegeStatus::Pending(_)) {
                assert!(!state.is_privileged, "privileged while pending after {trace:?}");
            }
        }
    }
}
