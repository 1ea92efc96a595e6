use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::net::types::User;

fn session(uid: &str) -> Session {
    Session {
        user: User { uid: uid.to_owned(), display_name: None, email: None, photo_url: None },
        id_token: "id".to_owned(),
        refresh_token: "refresh".to_owned(),
        expires_at_ms: 0,
    }
}

fn counting_listener(count: &Arc<AtomicUsize>) -> SessionListener {
    let count = Arc::clone(count);
    Arc::new(move |_| {
        count.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn registry_notifies_until_subscription_dropped() {
    let registry = ListenerRegistry::default();
    let count = Arc::new(AtomicUsize::new(0));
    let (_, subscription) = registry.register(counting_listener(&count));
    registry.notify(None);
    assert_eq!(count.load(Ordering::SeqCst), 1);
    drop(subscription);
    assert!(registry.is_empty());
    registry.notify(None);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn registry_deliver_targets_single_live_listener() {
    let registry = ListenerRegistry::default();
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let (first_id, first_sub) = registry.register(counting_listener(&first));
    let (_, _second_sub) = registry.register(counting_listener(&second));
    registry.deliver(first_id, Some(session("u1")));
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 0);
    first_sub.cancel();
    registry.deliver(first_id, None);
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn subscription_debug_reports_activity() {
    let subscription = Subscription::new(|| {});
    assert_eq!(format!("{subscription:?}"), "Subscription { active: true }");
}
