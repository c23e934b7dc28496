//! REST client for the inventory backend.
//!
//! All persistence and authorization live behind this boundary; the client
//! only shuttles JSON and attaches the session token. Calls are blocking and
//! are expected to run on background threads, never on the UI thread.

use crate::models::{InventoryItem, NewItem, Session};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Default backend address, matching the development server.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/";

/// Errors from a backend call.
///
/// Both variants are surfaced to the user as the same fixed per-operation
/// message; no structured error payload is parsed from the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {0}")]
    Status(StatusCode),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Credentials payload for login/signup.
///
/// The role selection is transmitted explicitly; the backend remains the
/// source of truth for the `is_admin` flag actually adopted (taken from the
/// returned [`Session`], not echoed from this request).
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
    pub is_admin: bool,
    pub is_user: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Blocking HTTP client scoped to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Build a client for the given base URL. A trailing slash is appended
    /// if missing so endpoint paths can be joined naively.
    pub fn new(base_url: &str) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");
        Self { base_url, http }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn token_header(token: &str) -> String {
        format!("Token {}", token)
    }

    fn check(response: reqwest::blocking::Response) -> ApiResult<reqwest::blocking::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status(status))
        }
    }

    /// POST `auth/login/`.
    pub fn login(&self, request: &AuthRequest) -> ApiResult<Session> {
        let response = self
            .http
            .post(self.endpoint("auth/login/"))
            .json(request)
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    /// POST `auth/signup/`.
    pub fn signup(&self, request: &AuthRequest) -> ApiResult<Session> {
        let response = self
            .http
            .post(self.endpoint("auth/signup/"))
            .json(request)
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    /// POST `auth/logout/`. The response body is ignored.
    pub fn logout(&self, token: &str) -> ApiResult<()> {
        let response = self
            .http
            .post(self.endpoint("auth/logout/"))
            .header("Authorization", Self::token_header(token))
            .send()?;
        Self::check(response)?;
        Ok(())
    }

    /// GET `inventory/`: the full item collection for this session.
    pub fn list_items(&self, token: &str) -> ApiResult<Vec<InventoryItem>> {
        let response = self
            .http
            .get(self.endpoint("inventory/"))
            .header("Authorization", Self::token_header(token))
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    /// POST `inventory/`: create an item, returning it with its assigned id.
    pub fn create_item(&self, token: &str, item: &NewItem) -> ApiResult<InventoryItem> {
        let response = self
            .http
            .post(self.endpoint("inventory/"))
            .header("Authorization", Self::token_header(token))
            .json(item)
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    /// DELETE `inventory/{id}/`. The response body is ignored.
    pub fn delete_item(&self, token: &str, id: i64) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.endpoint(&format!("inventory/{}/", id)))
            .header("Authorization", Self::token_header(token))
            .send()?;
        Self::check(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/api");
        assert_eq!(client.endpoint("inventory/"), "http://localhost:8000/api/inventory/");

        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.endpoint("inventory/7/"), "http://localhost:8000/api/inventory/7/");
    }

    #[test]
    fn auth_request_omits_absent_email() {
        let request = AuthRequest {
            username: "alice".into(),
            password: "pw".into(),
            is_admin: false,
            is_user: true,
            email: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("email").is_none());
        assert_eq!(json["is_user"], true);

        let request = AuthRequest {
            email: Some("a@x.com".into()),
            ..request
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["email"], "a@x.com");
    }
}
