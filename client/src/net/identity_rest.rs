//! Identity REST endpoints, wire DTOs and response parsing for `identity`.

#[cfg(test)]
#[path = "identity_rest_test.rs"]
mod identity_rest_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
use super::{IDENTITY_BASE_URL, IdentityError, SECURE_TOKEN_URL};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{Session, User};

#[cfg(any(test, feature = "hydrate"))]
pub(super) fn identity_endpoint(method: &str, api_key: &str) -> String {
    format!("{IDENTITY_BASE_URL}/accounts:{method}?key={}", urlencoding::encode(api_key))
}

#[cfg(any(test, feature = "hydrate"))]
pub(super) fn refresh_endpoint(api_key: &str) -> String {
    format!("{SECURE_TOKEN_URL}?key={}", urlencoding::encode(api_key))
}

#[cfg(any(test, feature = "hydrate"))]
pub(super) fn refresh_form(refresh_token: &str) -> String {
    format!("grant_type=refresh_token&refresh_token={}", urlencoding::encode(refresh_token))
}

#[cfg(any(test, feature = "hydrate"))]
pub(super) fn idp_request_body(id_token: &str, request_uri: &str) -> serde_json::Value {
    serde_json::json!({
        "postBody": format!("id_token={}&providerId=google.com", urlencoding::encode(id_token)),
        "requestUri": request_uri,
        "returnSecureToken": true,
        "returnIdpCredential": true,
    })
}

/// Body of `signInWithPassword`, `signUp` and `signInWithIdp`.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AuthResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

/// Secure Token refresh body (snake_case on the wire).
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
pub(super) struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
pub(super) struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(any(test, feature = "hydrate"))]
fn expiry_ms(expires_in: &str, now_ms: i64) -> Result<i64, IdentityError> {
    let seconds: i64 = expires_in
        .trim()
        .parse()
        .map_err(|_| IdentityError::Decode(format!("invalid expiresIn: {expires_in}")))?;
    Ok(now_ms + seconds * 1000)
}

#[cfg(any(test, feature = "hydrate"))]
pub(super) fn session_from_auth(response: AuthResponse, now_ms: i64) -> Result<Session, IdentityError> {
    Ok(Session {
        expires_at_ms: expiry_ms(&response.expires_in, now_ms)?,
        user: User {
            uid: response.local_id,
            display_name: non_empty(response.display_name),
            email: non_empty(response.email),
            photo_url: non_empty(response.photo_url),
        },
        id_token: response.id_token,
        refresh_token: response.refresh_token,
    })
}

#[cfg(any(test, feature = "hydrate"))]
pub(super) fn session_from_refresh(
    previous: &Session,
    response: RefreshResponse,
    now_ms: i64,
) -> Result<Session, IdentityError> {
    Ok(Session {
        user: previous.user.clone(),
        expires_at_ms: expiry_ms(&response.expires_in, now_ms)?,
        id_token: response.id_token,
        refresh_token: response.refresh_token,
    })
}

#[cfg(any(test, feature = "hydrate"))]
pub(super) fn user_from_lookup(response: LookupResponse) -> Option<User> {
    let user = response.users.into_iter().next()?;
    Some(User {
        uid: user.local_id,
        display_name: non_empty(user.display_name),
        email: non_empty(user.email),
        photo_url: non_empty(user.photo_url),
    })
}

/// Interpret a provider HTTP response.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn parse_response<R: DeserializeOwned>(status: u16, body: &str) -> Result<R, IdentityError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| IdentityError::Decode(e.to_string()));
    }
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => Err(IdentityError::Provider(envelope.error.message)),
        Err(_) => Err(IdentityError::Network(format!("provider responded with status {status}"))),
    }
}

#[cfg(feature = "hydrate")]
pub(super) fn network_error(err: gloo_net::Error) -> IdentityError {
    IdentityError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
pub(super) async fn read_response<R: DeserializeOwned>(response: gloo_net::http::Response) -> Result<R, IdentityError> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;
    parse_response(status, &body)
}

#[cfg(feature = "hydrate")]
pub(super) async fn post_json<B, R>(url: &str, body: &B) -> Result<R, IdentityError>
where
    B: serde::Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_response(response).await
}
