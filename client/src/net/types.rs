//! Shared DTOs for the backend event API and the identity provider.
//!
//! DESIGN
//! ======
//! Event types mirror the backend's JSON (camelCase, zone-less local
//! timestamps) so serde round-trips stay lossless. Identity types are owned by
//! the provider client; views only ever read `User`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// An event as returned by `GET /events`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Free-form description; truncated on list cards.
    #[serde(default)]
    pub description: String,
    /// Start time (venue-local, no zone).
    pub date_time: NaiveDateTime,
    /// End time (venue-local, no zone).
    pub end_date_time: NaiveDateTime,
    /// Venue name or address.
    #[serde(default)]
    pub location: String,
    /// Ticket price in whole euros; `0` means free entry.
    #[serde(default)]
    pub ticket_price: i64,
    /// Highlighted by the venue.
    #[serde(default)]
    pub top_pick: bool,
    /// Public URL of the uploaded poster image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Like counter as last seen by the server.
    #[serde(default, deserialize_with = "deserialize_null_as_zero")]
    pub likes: i64,
}

/// Fields an administrator submits when posting a new event.
///
/// Serialized as the `event` part of the multipart request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub name: String,
    pub date_time: NaiveDateTime,
    pub end_date_time: NaiveDateTime,
    pub ticket_price: i64,
    pub description: String,
    pub location: String,
    pub top_pick: bool,
}

/// The signed-in user's profile record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned user id.
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

/// A provider-issued session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub id_token: String,
    pub refresh_token: String,
    /// Id-token expiry in milliseconds since the Unix epoch.
    pub expires_at_ms: i64,
}

impl Session {
    /// Whether the id token is expired (or about to be) at `now_ms`.
    ///
    /// A one-minute margin keeps requests from racing the expiry.
    #[must_use]
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms + 60_000 >= self.expires_at_ms
    }
}

/// Claims read back from an id token payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub exp: i64,
    /// Custom claim set by the admin tool.
    #[serde(default)]
    pub admin: Option<bool>,
}

impl TokenClaims {
    /// Whether the token carries the `admin: true` custom claim.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.admin.unwrap_or(false)
    }
}

fn deserialize_null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}
