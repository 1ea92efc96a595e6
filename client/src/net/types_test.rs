use super::*;

fn at(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").unwrap()
}

#[test]
fn event_deserializes_backend_payload() {
    let raw = r#"{
        "id": 7,
        "name": "Techno Night",
        "description": "All night long",
        "dateTime": "2024-05-01T22:00:00",
        "endDateTime": "2024-05-02T04:00:00",
        "location": "Genialistide Klubi",
        "ticketPrice": 12,
        "topPick": true,
        "imageUrl": "https://cdn.example/poster.jpg",
        "likes": 3
    }"#;
    let event: Event = serde_json::from_str(raw).unwrap();
    assert_eq!(event.id, 7);
    assert_eq!(event.date_time, at("2024-05-01T22:00:00"));
    assert_eq!(event.end_date_time, at("2024-05-02T04:00:00"));
    assert_eq!(event.ticket_price, 12);
    assert!(event.top_pick);
    assert_eq!(event.image_url.as_deref(), Some("https://cdn.example/poster.jpg"));
    assert_eq!(event.likes, 3);
}

#[test]
fn event_null_likes_default_to_zero() {
    let raw = r#"{
        "id": 1,
        "name": "Open Mic",
        "dateTime": "2024-05-01T19:00:00",
        "endDateTime": "2024-05-01T21:00:00",
        "likes": null,
        "imageUrl": null
    }"#;
    let event: Event = serde_json::from_str(raw).unwrap();
    assert_eq!(event.likes, 0);
    assert_eq!(event.ticket_price, 0);
    assert!(event.image_url.is_none());
    assert!(event.description.is_empty());
}

#[test]
fn new_event_serializes_camel_case() {
    let event = NewEvent {
        name: "Jazz".to_owned(),
        date_time: at("2024-06-01T20:00:00"),
        end_date_time: at("2024-06-01T23:30:00"),
        ticket_price: 5,
        description: "Quartet".to_owned(),
        location: "Naiiv".to_owned(),
        top_pick: false,
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["dateTime"], "2024-06-01T20:00:00");
    assert_eq!(value["endDateTime"], "2024-06-01T23:30:00");
    assert_eq!(value["ticketPrice"], 5);
    assert_eq!(value["topPick"], false);
}

#[test]
fn session_expiry_uses_one_minute_margin() {
    let session = Session {
        user: User { uid: "u1".to_owned(), display_name: None, email: None, photo_url: None },
        id_token: "t".to_owned(),
        refresh_token: "r".to_owned(),
        expires_at_ms: 1_000_000,
    };
    assert!(!session.is_expired(900_000));
    assert!(session.is_expired(940_000));
    assert!(session.is_expired(1_000_000));
}

#[test]
fn token_claims_admin_defaults_to_false() {
    let claims: TokenClaims = serde_json::from_str(r#"{"sub":"u1","exp":10}"#).unwrap();
    assert!(!claims.is_admin());
    let claims: TokenClaims = serde_json::from_str(r#"{"sub":"u1","admin":true}"#).unwrap();
    assert!(claims.is_admin());
}
