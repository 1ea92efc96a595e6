use chrono::NaiveDate;

use super::*;

fn event(id: i64, day: u32, likes: i64) -> Event {
    let start = NaiveDate::from_ymd_opt(2024, 5, day).unwrap().and_hms_opt(20, 0, 0).unwrap();
    Event {
        id,
        name: format!("Event {id}"),
        description: String::new(),
        date_time: start,
        end_date_time: start,
        location: "Naiiv".to_owned(),
        ticket_price: 0,
        top_pick: false,
        image_url: None,
        likes,
    }
}

#[test]
fn load_sorts_by_start_time() {
    let mut state = EventsState::default();
    state.load(vec![event(1, 20, 0), event(2, 3, 0), event(3, 11, 0)]);
    let ids: Vec<i64> = state.items.iter().map(|i| i.event.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert!(!state.loading);
}

#[test]
fn load_failure_records_message() {
    let mut state = EventsState::default();
    state.load_failed("Failed to load events");
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("Failed to load events"));
}

#[test]
fn begin_like_flips_optimistically() {
    let mut state = EventsState::default();
    state.load(vec![event(1, 1, 4)]);
    state.begin_like(1).unwrap();
    let item = state.item(1).unwrap();
    assert!(item.liked);
    assert_eq!(item.event.likes, 5);
    assert_eq!(item.status, LikeStatus::Pending);

    state.confirm_like(1);
    state.begin_like(1).unwrap();
    let item = state.item(1).unwrap();
    assert!(!item.liked);
    assert_eq!(item.event.likes, 4);
}

#[test]
fn failed_like_rolls_back() {
    let mut state = EventsState::default();
    state.load(vec![event(1, 1, 4)]);
    let snapshot = state.begin_like(1).unwrap();
    state.fail_like(1, snapshot);
    let item = state.item(1).unwrap();
    assert!(!item.liked);
    assert_eq!(item.event.likes, 4);
    assert_eq!(item.status, LikeStatus::Failed);
}

#[test]
fn unknown_event_is_ignored() {
    let mut state = EventsState::default();
    state.load(vec![event(1, 1, 0)]);
    assert!(state.begin_like(9).is_none());
}
