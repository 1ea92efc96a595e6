use std::cell::Cell;

use chrono::NaiveDate;
use futures::executor::block_on;

use super::*;
use crate::net::types::{Event, User};

fn signed_in() -> AuthState {
    let mut state = AuthState::default();
    let epoch = state.session_started(User {
        uid: "u1".to_owned(),
        display_name: None,
        email: Some("u1@partyn.test".to_owned()),
        photo_url: None,
    });
    state.privilege_resolved(epoch, false);
    state
}

fn events_with(id: i64, likes: i64) -> RwSignal<EventsState> {
    let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(22, 0, 0).unwrap();
    let mut state = EventsState::default();
    state.load(vec![Event {
        id,
        name: "Techno".to_owned(),
        description: String::new(),
        date_time: start,
        end_date_time: start,
        location: "Kivi Baar".to_owned(),
        ticket_price: 10,
        top_pick: false,
        image_url: None,
        likes,
    }]);
    RwSignal::new(state)
}

#[test]
fn signed_out_like_redirects_without_request() {
    let toggle = LikeToggle::default();
    let mut state = AuthState::default();
    state.signed_out();
    assert_eq!(toggle.invoke(&state, 1), LikeIntent::RedirectToLogin("/auth?mode=login"));
}

#[test]
fn like_before_session_is_known_is_ignored() {
    let toggle = LikeToggle::default();
    assert_eq!(toggle.invoke(&AuthState::default(), 1), LikeIntent::Ignore);
}

#[test]
fn burst_of_five_clicks_sends_exactly_one_request() {
    let toggle = LikeToggle::default();
    let auth = signed_in();
    let events = events_with(1, 0);
    let requests = Cell::new(0);

    let tickets: Vec<_> = (0..5)
        .map(|_| match toggle.invoke(&auth, 1) {
            LikeIntent::Schedule(ticket) => ticket,
            other => panic!("unexpected like intent {other:?}"),
        })
        .collect();

    for ticket in &tickets {
        if toggle.should_send(ticket) {
            block_on(send_like(events, 1, || async {
                requests.set(requests.get() + 1);
                Ok(())
            }));
        }
    }

    assert_eq!(requests.get(), 1);
    let item = events.get_untracked().item(1).cloned().unwrap();
    assert!(item.liked);
    assert_eq!(item.event.likes, 1);
    assert_eq!(item.status, LikeStatus::Confirmed);
}

#[test]
fn clicks_on_different_events_each_send() {
    let toggle = LikeToggle::default();
    let auth = signed_in();
    let LikeIntent::Schedule(a) = toggle.invoke(&auth, 1) else { panic!("expected schedule") };
    let LikeIntent::Schedule(b) = toggle.invoke(&auth, 2) else { panic!("expected schedule") };
    assert!(toggle.should_send(&a));
    assert!(toggle.should_send(&b));
}

#[test]
fn failed_request_rolls_back_like() {
    let events = events_with(3, 7);
    let status = block_on(send_like(events, 3, || async { Err(ApiError::Status(500)) }));
    assert_eq!(status, LikeStatus::Failed);
    let item = events.get_untracked().item(3).cloned().unwrap();
    assert!(!item.liked);
    assert_eq!(item.event.likes, 7);
}

#[test]
fn like_for_unknown_event_sends_nothing() {
    let events = events_with(3, 7);
    let sent = Cell::new(false);
    let status = block_on(send_like(events, 99, || async {
        sent.set(true);
        Ok(())
    }));
    assert_eq!(status, LikeStatus::Idle);
    assert!(!sent.get());
}
