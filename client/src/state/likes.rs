//! Like-toggle handling for event cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Clicks are debounced per event id; only the last click of a burst sends
//! `POST /events/{id}/like`. The card flips immediately when the request is
//! sent and rolls back if it fails.

#[cfg(test)]
#[path = "likes_test.rs"]
mod likes_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

use super::auth::AuthState;
use super::events::{EventsState, LikeStatus};
use crate::net::api::ApiError;
use crate::util::debounce::{DebounceTicket, Debouncer};
use crate::util::guards::LOGIN_PATH;

/// Quiet window after the last click before a like request is sent.
pub const LIKE_DEBOUNCE: Duration = Duration::from_millis(300);

/// What the caller must do after a like click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LikeIntent {
    /// The session is not known yet; drop the click.
    Ignore,
    /// Nobody is signed in; navigate here and send nothing.
    RedirectToLogin(&'static str),
    /// Wait [`LIKE_DEBOUNCE`], then send if the ticket is still current.
    Schedule(DebounceTicket<i64>),
}

/// Per-event debounced like toggle. Clones share debounce state.
#[derive(Clone, Debug, Default)]
pub struct LikeToggle {
    debouncer: Debouncer<i64>,
}

impl LikeToggle {
    pub fn invoke(&self, auth: &AuthState, event_id: i64) -> LikeIntent {
        if auth.initializing {
            return LikeIntent::Ignore;
        }
        if auth.user.is_none() {
            return LikeIntent::RedirectToLogin(LOGIN_PATH);
        }
        LikeIntent::Schedule(self.debouncer.schedule(event_id))
    }

    /// Whether no later click for the same event arrived.
    #[must_use]
    pub fn should_send(&self, ticket: &DebounceTicket<i64>) -> bool {
        self.debouncer.is_current(ticket)
    }

    /// Sleep out the debounce window and report whether to send.
    #[cfg(feature = "hydrate")]
    pub async fn settle(&self, ticket: &DebounceTicket<i64>) -> bool {
        gloo_timers::future::sleep(LIKE_DEBOUNCE).await;
        self.should_send(ticket)
    }
}

/// Send one like request with an optimistic flip and rollback on failure.
pub async fn send_like<F, Fut>(events: RwSignal<EventsState>, event_id: i64, send: F) -> LikeStatus
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let Some(snapshot) = events.try_update(|state| state.begin_like(event_id)).flatten() else {
        return LikeStatus::Idle;
    };
    match send().await {
        Ok(()) => {
            events.try_update(|state| state.confirm_like(event_id));
            LikeStatus::Confirmed
        }
        Err(e) => {
            leptos::logging::error!("like for event {event_id} failed: {e}");
            events.try_update(|state| state.fail_like(event_id, snapshot));
            LikeStatus::Failed
        }
    }
}
