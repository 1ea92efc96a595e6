//! Persisted provider session in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider keeps its session here so a reload restores the
//! signed-in user. Outside the browser nothing is stored: loads miss and
//! writes are dropped, which keeps SSR renders in their initializing shape.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::Session;

/// Storage key holding the serialized provider session.
pub const SESSION_KEY: &str = "partyn.session";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// The persisted session, if one exists and still parses.
///
/// An unreadable entry is removed so it cannot shadow a later sign-in.
pub fn load_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(SESSION_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                leptos::logging::warn!("discarding unreadable stored session: {e}");
                clear_session();
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn save_session(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        match serde_json::to_string(session) {
            Ok(raw) => {
                let _ = storage.set_item(SESSION_KEY, &raw);
            }
            Err(e) => leptos::logging::warn!("session not persisted: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
