//! Session listener registry extracted from `identity`.

#[cfg(test)]
#[path = "identity_listeners_test.rs"]
mod identity_listeners_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::net::types::Session;

/// Callback invoked with the new session (or `None` on sign-out).
pub type SessionListener = Arc<dyn Fn(Option<Session>) + Send + Sync>;

/// Handle for a registered session listener; unregisters on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Unregister now instead of waiting for drop.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.cancel.is_some()).finish()
    }
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, SessionListener)>,
}

/// Set of session listeners shared between a provider and its subscriptions.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl ListenerRegistry {
    /// Register `listener`, returning its id and the handle that removes it.
    pub fn register(&self, listener: SessionListener) -> (u64, Subscription) {
        let id = {
            let mut registry = lock(&self.inner);
            registry.next_id += 1;
            let id = registry.next_id;
            registry.listeners.push((id, listener));
            id
        };
        let inner = Arc::clone(&self.inner);
        let subscription = Subscription::new(move || {
            lock(&inner).listeners.retain(|(listener_id, _)| *listener_id != id);
        });
        (id, subscription)
    }

    /// Call every registered listener with `session`.
    pub fn notify(&self, session: Option<&Session>) {
        let listeners: Vec<SessionListener> = lock(&self.inner).listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in listeners {
            listener(session.cloned());
        }
    }

    /// Call the listener registered under `id`, if it is still registered.
    pub fn deliver(&self, id: u64, session: Option<Session>) {
        let listener = lock(&self.inner).listeners.iter().find(|(listener_id, _)| *listener_id == id).map(|(_, l)| Arc::clone(l));
        if let Some(listener) = listener {
            listener(session);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.inner).listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lock `mutex`, recovering the data if a holder panicked.
pub(super) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
