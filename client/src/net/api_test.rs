use chrono::NaiveDate;

use super::*;

fn config() -> ClientConfig {
    ClientConfig::from_parts(Some("k"), Some("http://localhost:8080/"), None)
}

#[test]
fn events_endpoint_uses_backend_base() {
    assert_eq!(events_endpoint(&config()), "http://localhost:8080/events");
}

#[test]
fn like_endpoint_formats_event_id() {
    assert_eq!(like_endpoint(&config(), 42), "http://localhost:8080/events/42/like");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn check_status_accepts_only_2xx() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(201), Ok(()));
    assert_eq!(check_status(401), Err(ApiError::Status(401)));
    assert_eq!(check_status(500), Err(ApiError::Status(500)));
}

#[test]
fn event_part_is_camel_case_json() {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(20, 0, 0).unwrap();
    let event = NewEvent {
        name: "Jazz".to_owned(),
        date_time: start,
        end_date_time: start,
        ticket_price: 0,
        description: String::new(),
        location: "Naiiv".to_owned(),
        top_pick: true,
    };
    let json: serde_json::Value = serde_json::from_str(&event_part(&event).unwrap()).unwrap();
    assert_eq!(json["name"], "Jazz");
    assert_eq!(json["dateTime"], "2024-06-01T20:00:00");
    assert_eq!(json["topPick"], true);
}

#[test]
fn identity_errors_convert_to_auth_errors() {
    let err: ApiError = IdentityError::NoSession.into();
    assert_eq!(err, ApiError::Auth(IdentityError::NoSession));
}
