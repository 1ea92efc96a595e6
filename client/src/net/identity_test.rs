use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::net::types::User;

fn jwt(payload: &serde_json::Value) -> String {
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap());
    format!("eyJhbGciOiJSUzI1NiJ9.{body}.c2ln")
}

fn session(uid: &str) -> Session {
    session_with(uid, "refresh", "id")
}

fn session_with(uid: &str, refresh_token: &str, id_token: &str) -> Session {
    Session {
        user: User { uid: uid.to_owned(), display_name: None, email: None, photo_url: None },
        id_token: id_token.to_owned(),
        refresh_token: refresh_token.to_owned(),
        expires_at_ms: 0,
    }
}

fn identity() -> FirebaseIdentity {
    FirebaseIdentity::new(ClientConfig::from_parts(Some("k"), None, None))
}

fn counting_listener(count: &Arc<AtomicUsize>) -> SessionListener {
    let count = Arc::clone(count);
    Arc::new(move |_| {
        count.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn decode_claims_reads_admin_claim() {
    let token = jwt(&serde_json::json!({ "sub": "u1", "email": "a@partyn.test", "exp": 99, "admin": true }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.sub, "u1");
    assert_eq!(claims.email.as_deref(), Some("a@partyn.test"));
    assert!(claims.is_admin());
}

#[test]
fn decode_claims_without_admin_claim_is_not_privileged() {
    let token = jwt(&serde_json::json!({ "sub": "u2" }));
    assert!(!decode_claims(&token).unwrap().is_admin());
}

#[test]
fn decode_claims_rejects_malformed_tokens() {
    assert!(matches!(decode_claims("not-a-jwt"), Err(IdentityError::Decode(_))));
    assert!(matches!(decode_claims("a.!!!.c"), Err(IdentityError::Decode(_))));
    assert!(matches!(decode_claims("a.b.c.d"), Err(IdentityError::Decode(_))));
}

#[test]
fn provider_error_displays_message_verbatim() {
    let err = IdentityError::Provider("INVALID_LOGIN_CREDENTIALS".to_owned());
    assert_eq!(err.to_string(), "INVALID_LOGIN_CREDENTIALS");
}

#[test]
fn parse_callback_fragment_extracts_id_token() {
    let token = parse_callback_fragment("#state=x&id_token=abc.def.ghi&authuser=0").unwrap();
    assert_eq!(token, "abc.def.ghi");
}

#[test]
fn parse_callback_fragment_reports_provider_error() {
    let err = parse_callback_fragment("#error=access_denied").unwrap_err();
    assert_eq!(err, IdentityError::Provider("access_denied".to_owned()));
}

#[test]
fn parse_callback_fragment_without_token_is_decode_error() {
    assert!(matches!(parse_callback_fragment(""), Err(IdentityError::Decode(_))));
    assert!(matches!(parse_callback_fragment("#id_token="), Err(IdentityError::Decode(_))));
}

#[test]
fn google_authorize_url_encodes_parameters() {
    let url = google_authorize_url("client-1", "http://localhost:3000/auth/callback", "n1");
    assert!(url.starts_with(GOOGLE_AUTHORIZE_URL));
    assert!(url.contains("client_id=client-1"));
    assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fcallback"));
    assert!(url.contains("response_type=id_token"));
    assert!(url.contains("scope=openid%20email%20profile"));
}

#[test]
fn firebase_establish_notifies_listeners_and_store_does_not() {
    let identity = FirebaseIdentity::new(ClientConfig::from_parts(Some("k"), None, None));
    let count = Arc::new(AtomicUsize::new(0));
    let _subscription = identity.on_session_change(counting_listener(&count));
    identity.store(Some(session("u1")));
    assert_eq!(count.load(Ordering::SeqCst), 0);
    identity.establish(Some(session("u2")));
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(identity.current().map(|s| s.user.uid), Some("u2".to_owned()));
}

#[test]
fn firebase_requires_api_key() {
    let identity = FirebaseIdentity::new(ClientConfig::from_parts(None, None, None));
    assert_eq!(identity.api_key(), Err(IdentityError::NotConfigured("PARTYN_FIREBASE_API_KEY")));
}

#[test]
fn federated_sign_in_requires_client_id() {
    let identity = FirebaseIdentity::new(ClientConfig::from_parts(Some("k"), None, None));
    assert_eq!(
        identity.begin_federated_sign_in(),
        Err(IdentityError::NotConfigured("PARTYN_GOOGLE_CLIENT_ID"))
    );
}

#[test]
fn refresh_result_is_stored_while_session_is_unchanged() {
    let identity = identity();
    let signed_in = session_with("u1", "r1", "id-1");
    identity.store(Some(signed_in.clone()));
    assert!(identity.replace_if_current(Some(&signed_in), Some(session_with("u1", "r1", "id-2"))));
    assert_eq!(identity.current().map(|s| s.id_token), Some("id-2".to_owned()));
}

#[test]
fn refresh_finishing_after_sign_out_does_not_restore_session() {
    let identity = identity();
    let in_flight = session_with("u1", "r1", "id-1");
    identity.store(Some(in_flight.clone()));
    identity.establish(None);
    assert!(!identity.replace_if_current(Some(&in_flight), Some(session_with("u1", "r1", "id-2"))));
    assert_eq!(identity.current(), None);
}

#[test]
fn refresh_finishing_after_account_switch_keeps_newer_session() {
    let identity = identity();
    let first = session_with("alice", "r-alice", "id-alice");
    identity.store(Some(first.clone()));
    let second = session_with("bob", "r-bob", "id-bob");
    identity.establish(Some(second.clone()));
    assert!(!identity.replace_if_current(Some(&first), Some(session_with("alice", "r-alice", "id-alice-2"))));
    assert_eq!(identity.current(), Some(second));
}

#[test]
fn refresh_for_same_user_after_re_sign_in_is_discarded() {
    let identity = identity();
    let old = session_with("u1", "r-old", "id-old");
    identity.store(Some(old.clone()));
    let fresh = session_with("u1", "r-new", "id-new");
    identity.establish(Some(fresh.clone()));
    assert!(!identity.replace_if_current(Some(&old), Some(session_with("u1", "r-old", "id-old-2"))));
    assert_eq!(identity.current(), Some(fresh));
}

#[test]
fn restore_finishing_after_sign_in_keeps_signed_in_session() {
    let identity = identity();
    let signed_in = session_with("u2", "r2", "id-2");
    identity.establish(Some(signed_in.clone()));
    assert!(!identity.replace_if_current(None, Some(session_with("u1", "r1", "id-1"))));
    assert!(!identity.replace_if_current(None, None));
    assert_eq!(identity.current(), Some(signed_in));
}

#[test]
fn restore_into_empty_provider_is_stored() {
    let identity = identity();
    assert!(identity.replace_if_current(None, Some(session("u1"))));
    assert_eq!(identity.current().map(|s| s.user.uid), Some("u1".to_owned()));
}

#[test]
fn same_session_compares_user_and_refresh_token() {
    let a = session_with("u1", "r1", "id-1");
    assert!(same_session(Some(&a), Some(&session_with("u1", "r1", "id-2"))));
    assert!(!same_session(Some(&a), Some(&session_with("u1", "r2", "id-1"))));
    assert!(!same_session(Some(&a), Some(&session_with("u2", "r1", "id-1"))));
    assert!(!same_session(Some(&a), None));
    assert!(same_session(None, None));
}
