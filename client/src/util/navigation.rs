//! Deferred client-side navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Click handlers, callbacks and spawned tasks request a route change by
//! writing a path into the returned signal; a single effect owned by the
//! component performs the navigation inside the router context.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Install a navigation effect and return the signal that drives it.
pub fn install_navigation_request() -> RwSignal<Option<String>> {
    let request = RwSignal::new(None::<String>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = request.get() {
            request.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
    request
}
