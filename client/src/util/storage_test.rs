use super::*;
use crate::net::types::User;

#[test]
fn session_is_never_persisted_outside_the_browser() {
    let session = Session {
        user: User { uid: "u1".to_owned(), display_name: None, email: None, photo_url: None },
        id_token: "id".to_owned(),
        refresh_token: "refresh".to_owned(),
        expires_at_ms: 0,
    };
    save_session(&session);
    assert_eq!(load_session(), None);
    clear_session();
    assert_eq!(load_session(), None);
}

#[test]
fn session_key_is_namespaced() {
    assert_eq!(SESSION_KEY, "partyn.session");
}
