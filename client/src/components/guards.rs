//! Guard wrappers for route content.
//!
//! Both read the [`AuthStore`] from context and re-evaluate whenever auth
//! state changes, so a sign-out while on a guarded page redirects at once.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;
use crate::state::auth_store::AuthStore;
use crate::util::guards::{GuardDecision, require_authenticated, require_privileged};

fn guarded(decide: fn(&AuthState) -> GuardDecision, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthStore>().state();
    move || match decide(&auth.get()) {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
        GuardDecision::Wait => view! { <div class="guard-loading">"Loading..."</div> }.into_any(),
    }
}

/// Render children only for signed-in users.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(require_authenticated, children)
}

/// Render children only for privileged users.
#[component]
pub fn RequirePrivileged(children: ChildrenFn) -> impl IntoView {
    guarded(require_privileged, children)
}
