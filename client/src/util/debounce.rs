//! Keyed trailing-edge debouncer.
//!
//! Each `schedule` call issues a ticket and supersedes every earlier ticket for
//! the same key. After the quiet window the caller asks whether its ticket is
//! still current; only the last ticket of a burst is.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};

/// Proof of one scheduled invocation for `key`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebounceTicket<K> {
    pub key: K,
    generation: u64,
}

#[derive(Debug)]
struct Generations<K> {
    next: u64,
    latest: HashMap<K, u64>,
}

/// Tracks the latest ticket per key. Clones share state.
#[derive(Clone, Debug)]
pub struct Debouncer<K> {
    inner: Arc<Mutex<Generations<K>>>,
}

impl<K> Default for Debouncer<K> {
    fn default() -> Self {
        Self { inner: Arc::new(Mutex::new(Generations { next: 0, latest: HashMap::new() })) }
    }
}

impl<K: Eq + Hash + Clone> Debouncer<K> {
    /// Issue a ticket for `key`, superseding any outstanding one.
    pub fn schedule(&self, key: K) -> DebounceTicket<K> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.next += 1;
        let generation = inner.next;
        inner.latest.insert(key.clone(), generation);
        DebounceTicket { key, generation }
    }

    /// Whether `ticket` is still the latest for its key.
    #[must_use]
    pub fn is_current(&self, ticket: &DebounceTicket<K>) -> bool {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.latest.get(&ticket.key) == Some(&ticket.generation)
    }
}
