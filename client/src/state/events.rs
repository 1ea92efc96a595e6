//! Event-list state for the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled from `GET /events` and mutated by the like toggle. Like counts are
//! optimistic: they are never reconciled with the server until the list is
//! fetched again.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::net::types::Event;

/// Progress of the most recent like request for one event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LikeStatus {
    #[default]
    Idle,
    Pending,
    Confirmed,
    Failed,
}

/// An event plus the caller's local like state.
#[derive(Clone, Debug, PartialEq)]
pub struct EventItem {
    pub event: Event,
    pub liked: bool,
    pub status: LikeStatus,
}

/// Values restored when a like request fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LikeSnapshot {
    liked: bool,
    likes: i64,
}

/// Loaded events, or the reason they could not be loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct EventsState {
    pub items: Vec<EventItem>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for EventsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl EventsState {
    /// Replace the list with `events`, ordered by start time.
    pub fn load(&mut self, mut events: Vec<Event>) {
        events.sort_by_key(|event| event.date_time);
        self.items = events
            .into_iter()
            .map(|event| EventItem { event, liked: false, status: LikeStatus::Idle })
            .collect();
        self.loading = false;
        self.error = None;
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.items.clear();
        self.loading = false;
        self.error = Some(message.into());
    }

    #[must_use]
    pub fn item(&self, event_id: i64) -> Option<&EventItem> {
        self.items.iter().find(|item| item.event.id == event_id)
    }

    fn item_mut(&mut self, event_id: i64) -> Option<&mut EventItem> {
        self.items.iter_mut().find(|item| item.event.id == event_id)
    }

    /// Flip the like optimistically and mark the request pending.
    ///
    /// Returns the pre-flip values, or `None` for an unknown event.
    pub fn begin_like(&mut self, event_id: i64) -> Option<LikeSnapshot> {
        let item = self.item_mut(event_id)?;
        let snapshot = LikeSnapshot { liked: item.liked, likes: item.event.likes };
        item.liked = !item.liked;
        item.event.likes += if item.liked { 1 } else { -1 };
        item.status = LikeStatus::Pending;
        Some(snapshot)
    }

    pub fn confirm_like(&mut self, event_id: i64) {
        if let Some(item) = self.item_mut(event_id) {
            item.status = LikeStatus::Confirmed;
        }
    }

    /// Roll back to `snapshot` and mark the request failed.
    pub fn fail_like(&mut self, event_id: i64, snapshot: LikeSnapshot) {
        if let Some(item) = self.item_mut(event_id) {
            item.liked = snapshot.liked;
            item.event.likes = snapshot.likes;
            item.status = LikeStatus::Failed;
        }
    }
}
