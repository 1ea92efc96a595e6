//! Admin custom-claim operations against the identity provider's account API.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use serde_json::{Value, json};

use crate::CliError;

pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Authorized client for one provider project.
#[derive(Debug, Clone)]
pub struct ClaimsClient {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    access_token: String,
}

impl ClaimsClient {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str, project_id: &str, access_token: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            project_id: project_id.to_owned(),
            access_token,
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/projects/{}/accounts:{action}", self.base_url, self.project_id)
    }

    /// Replace the user's custom claims with `{"admin": granted}`.
    pub async fn set_admin(&self, uid: &str, granted: bool) -> Result<(), CliError> {
        let body = admin_update_body(uid, granted);
        self.request("update", &body).await?;
        Ok(())
    }

    /// Current custom claims of `uid`, or an empty object when none are set.
    pub async fn custom_claims(&self, uid: &str) -> Result<Value, CliError> {
        let body = json!({ "localId": [uid] });
        let response = self.request("lookup", &body).await?;
        let user = response
            .get("users")
            .and_then(Value::as_array)
            .and_then(|users| users.first())
            .ok_or_else(|| CliError::UserNotFound(uid.to_owned()))?;
        match user.get("customAttributes").and_then(Value::as_str) {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(raw)?),
            _ => Ok(json!({})),
        }
    }

    async fn request(&self, action: &str, body: &Value) -> Result<Value, CliError> {
        let response = self
            .http
            .post(self.endpoint(action))
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let value = response.json::<Value>().await.unwrap_or(Value::Null);
        if !status.is_success() {
            let message = value
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map_or_else(|| value.to_string(), str::to_owned);
            return Err(CliError::ServerError { operation: format!("accounts:{action}"), status: status.as_u16(), message });
        }
        Ok(value)
    }
}

/// `accounts:update` payload; `customAttributes` is a JSON-encoded string.
#[must_use]
pub fn admin_update_body(uid: &str, granted: bool) -> Value {
    json!({
        "localId": uid,
        "customAttributes": json!({ "admin": granted }).to_string(),
    })
}
