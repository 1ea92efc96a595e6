//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so provider credentials and the
//! backend location are baked in from the build environment. The SSR host
//! compiles the same crate and therefore sees identical values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Identity-provider and backend settings shared by the whole app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Web API key of the identity provider project.
    pub firebase_api_key: String,
    /// Backend base URL without a trailing slash.
    pub backend_url: String,
    /// OAuth client id for Google sign-in; federated sign-in is disabled when absent.
    pub google_client_id: Option<String>,
}

impl ClientConfig {
    /// Read `PARTYN_FIREBASE_API_KEY`, `PARTYN_BACKEND_URL` and
    /// `PARTYN_GOOGLE_CLIENT_ID` as captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("PARTYN_FIREBASE_API_KEY"),
            option_env!("PARTYN_BACKEND_URL"),
            option_env!("PARTYN_GOOGLE_CLIENT_ID"),
        )
    }

    /// Assemble a config from optional raw values, applying defaults.
    #[must_use]
    pub fn from_parts(api_key: Option<&str>, backend_url: Option<&str>, google_client_id: Option<&str>) -> Self {
        let backend_url = backend_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_owned();
        let google_client_id = google_client_id
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_owned);
        Self { firebase_api_key: api_key.unwrap_or_default().trim().to_owned(), backend_url, google_client_id }
    }

    /// Absolute backend URL for `path` (which must start with `/`).
    #[must_use]
    pub fn backend_endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.backend_url)
    }
}
