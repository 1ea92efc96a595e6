//! Service-account credentials and the OAuth JWT bearer grant.
//!
//! SYSTEM CONTEXT
//! ==============
//! The operator CLI talks to the identity provider's admin API with an access
//! token minted from a service-account key. The key is the JSON document the
//! provider console exports; only the fields below are read.
//!
//! ERROR HANDLING
//! ==============
//! Missing or unreadable key material is reported before any network call.
//! A rejected grant surfaces as `CliError::ServerError` with the provider body.

#[cfg(test)]
#[path = "service_account_test.rs"]
mod service_account_test;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::CliError;

pub const ADMIN_SCOPE: &str = "https://www.googleapis.com/auth/identitytoolkit https://www.googleapis.com/auth/cloud-platform";
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: u64 = 3600;

#[derive(Clone, Deserialize)]
pub struct ServiceAccount {
    pub project_id: String,
    pub client_email: String,
    pub private_key: String,
    pub token_uri: String,
}

impl std::fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

/// Claims of the signed assertion exchanged at `token_uri`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: u64,
    pub exp: u64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl ServiceAccount {
    /// Load credentials from inline JSON, falling back to a key file.
    pub fn load(inline: Option<&str>, file: Option<&Path>) -> Result<Self, CliError> {
        if let Some(json) = inline.map(str::trim).filter(|v| !v.is_empty()) {
            return Self::from_json(json);
        }
        let Some(path) = file else {
            return Err(CliError::MissingCredentials);
        };
        let json = std::fs::read_to_string(path).map_err(|source| CliError::ReadKeyFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, CliError> {
        serde_json::from_str(json).map_err(CliError::InvalidServiceAccount)
    }

    #[must_use]
    pub fn claims(&self, now: u64) -> AssertionClaims {
        AssertionClaims {
            iss: self.client_email.clone(),
            scope: ADMIN_SCOPE.to_owned(),
            aud: self.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        }
    }

    /// RS256-signed assertion for the JWT bearer grant.
    pub fn assertion(&self, now: u64) -> Result<String, CliError> {
        let key = jsonwebtoken::EncodingKey::from_rsa_pem(self.private_key.as_bytes())?;
        let header = jsonwebtoken::Header::new(jsonwebtoken::Algorithm::RS256);
        Ok(jsonwebtoken::encode(&header, &self.claims(now), &key)?)
    }

    /// Exchange a fresh assertion for an access token.
    pub async fn access_token(&self, client: &reqwest::Client, now: u64) -> Result<String, CliError> {
        let assertion = self.assertion(now)?;
        let response = client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CliError::ServerError { operation: "token exchange".to_owned(), status: status.as_u16(), message });
        }
        let token = response.json::<TokenResponse>().await?;
        Ok(token.access_token)
    }
}
