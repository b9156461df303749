//! HTTP client for the wishlist backend
//!
//! A single `reqwest::Client` is built once per process with default headers
//! and a request timeout. The bearer token is attached in exactly one place
//! (`authed`), from the session the caller passes in - there are no ambient
//! storage reads per request.

use reqwest::{header, Client, Method, RequestBuilder, Response};
use std::time::Duration;

use crate::auth::validate_registration;
use crate::config::AppConfig;
use crate::error::{classify_response, Error, Result};
use crate::models::{AuthRequest, Session};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Typed client for the wishlist REST API.
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a client for a base URL, e.g. `https://host/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a client from the loaded app config.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start an unauthenticated request.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Start an authenticated request. This is the only place the
    /// Authorization header is written.
    pub(crate) fn authed(
        &self,
        method: Method,
        path: &str,
        session: &Session,
    ) -> RequestBuilder {
        self.request(method, path)
            .header(header::AUTHORIZATION, format!("Bearer {}", session.token))
    }

    /// Resolve a response into either the success response or a classified
    /// error built from the status and body.
    pub(crate) async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(classify_response(status, &body))
    }

    // ── Session Manager ──────────────────────────────────────

    /// POST /Auth/login. On success the caller persists the returned session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(Error::validation("username and password are required"));
        }

        log::debug!("Logging in as {}", username);
        let response = self
            .request(Method::POST, "/Auth/login")
            .json(&AuthRequest::new(username.trim(), password))
            .send()
            .await?;

        let session: Session = Self::check(response).await?.json().await?;
        Ok(session)
    }

    /// POST /Auth/register. The local validation gate runs first; only when
    /// every rule passes does the request go out.
    pub async fn register(&self, username: &str, password: &str, confirm: &str) -> Result<()> {
        validate_registration(username, password, confirm)?;

        log::debug!("Registering {}", username);
        let response = self
            .request(Method::POST, "/Auth/register")
            .json(&AuthRequest::new(username.trim(), password))
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("https://host.example/api/").unwrap();
        assert_eq!(client.base_url(), "https://host.example/api");
        assert_eq!(
            client.url("/Gift/wishlist"),
            "https://host.example/api/Gift/wishlist"
        );
        assert_eq!(client.url("Gift/g-1"), "https://host.example/api/Gift/g-1");
    }

    #[tokio::test]
    async fn test_login_rejects_blank_credentials() {
        let client = ApiClient::new("http://localhost:0/api").unwrap();
        assert!(matches!(
            client.login("", "Passw0rd").await,
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            client.login("alice", "").await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_register_validation_gate_runs_before_network() {
        // Port 0 is unroutable; a validation failure must surface without
        // ever attempting the request.
        let client = ApiClient::new("http://localhost:0/api").unwrap();
        let err = client
            .register("alice", "abc12345", "abc12345")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
