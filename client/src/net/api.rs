//! Backend event API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`], since the
//! backend is only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed [`ApiError`]. Views map it to a fixed
//! user-facing message and log the detail.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::identity::IdentityError;
use super::types::{Event, NewEvent};
use crate::config::ClientConfig;

/// Failures talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend responded with status {0}")]
    Status(u16),
    #[error("unexpected backend response: {0}")]
    Decode(String),
    #[error("no bearer token: {0}")]
    Auth(#[from] IdentityError),
    #[error("backend API is only available in the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn events_endpoint(config: &ClientConfig) -> String {
    config.backend_endpoint("/events")
}

#[cfg(any(test, feature = "hydrate"))]
fn like_endpoint(config: &ClientConfig, event_id: i64) -> String {
    config.backend_endpoint(&format!("/events/{event_id}/like"))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// JSON text of the `event` multipart part.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the event cannot be serialized.
pub fn event_part(event: &NewEvent) -> Result<String, ApiError> {
    serde_json::to_string(event).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn network_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Fetch all events via `GET /events`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is not a JSON event list.
pub async fn fetch_events(config: &ClientConfig) -> Result<Vec<Event>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&events_endpoint(config))
            .send()
            .await
            .map_err(network_error)?;
        check_status(resp.status())?;
        resp.json::<Vec<Event>>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Toggle the caller's like on an event via `POST /events/{id}/like`.
///
/// # Errors
///
/// Returns an error if the request fails or the status is not 2xx.
pub async fn like_event(config: &ClientConfig, event_id: i64, token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&like_endpoint(config, event_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network_error)?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, event_id, token);
        Err(ApiError::Unavailable)
    }
}

/// Post a new event with its poster image via multipart `POST /events`.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails, or the
/// status is not 2xx.
#[cfg(feature = "hydrate")]
pub async fn create_event(
    config: &ClientConfig,
    token: &str,
    event: &NewEvent,
    image: Option<&web_sys::File>,
) -> Result<(), ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_owned()))?;
    form.append_with_str("event", &event_part(event)?)
        .map_err(|_| ApiError::Network("could not attach event".to_owned()))?;
    if let Some(image) = image {
        form.append_with_blob("file", image)
            .map_err(|_| ApiError::Network("could not attach image".to_owned()))?;
    }
    let resp = gloo_net::http::Request::post(&events_endpoint(config))
        .header("Authorization", &bearer(token))
        .body(form)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    check_status(resp.status())
}
