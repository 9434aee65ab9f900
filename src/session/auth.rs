/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

//! Authentication for the Patchworks API
//!
//! This module provides the authenticated send path used by every API
//! request:
//! - attaches the cached bearer token when one is present
//! - detects a 401 response, performs the login exchange and resends the
//!   original request once with the fresh token
//! - caches the refreshed token in the shared [`Credentials`]
//!
//! A second 401 after a successful reauthentication is returned to the
//! caller as-is; the contract caps at one reauthentication per call.

use crate::constants::{LOGIN_PATH, USER_AGENT};
use crate::error::AppError;
use crate::session::credentials::Credentials;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Request, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Authentication manager shared by every client built from one builder
///
/// Owns a dedicated HTTP client for the login exchange; the login endpoint
/// lives on the fabric API regardless of which API family the wrapped
/// request targets, and login requests bypass the rate gate.
pub struct Authenticator {
    credentials: Arc<Credentials>,
    login_url: String,
    client: Client,
}

impl Authenticator {
    /// Creates a new authenticator against the given fabric base URL
    ///
    /// # Arguments
    /// * `credentials` - Shared credentials holding the token slot
    /// * `fabric_base_url` - Base URL of the fabric API hosting `/login`
    pub fn new(credentials: Arc<Credentials>, fabric_base_url: &str) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        let login_url = format!("{}/{}", fabric_base_url.trim_end_matches('/'), LOGIN_PATH);

        Self {
            credentials,
            login_url,
            client,
        }
    }

    /// Performs the login exchange and stores the returned token
    ///
    /// POSTs `{email, password}` to the login endpoint. Any non-200 answer
    /// fails with [`AppError::AuthenticationFailed`] and is never retried.
    ///
    /// # Returns
    /// * `Ok(String)` - The fresh bearer token, already cached in the credentials
    /// * `Err(AppError)` - If the exchange fails or the body has no token
    pub async fn login(&self) -> Result<String, AppError> {
        let body = serde_json::json!({
            "email": self.credentials.username(),
            "password": self.credentials.password(),
        });

        let response = self
            .client
            .post(&self.login_url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::AuthenticationFailed { status });
        }

        let text = response.text().await?;
        let decoded: Value = serde_json::from_str(&text)?;
        let token = decoded
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AppError::MalformedResponse("login response has no token field".to_string())
            })?;

        self.credentials.set_token(token);
        debug!("Authentication successful");
        Ok(token.to_string())
    }

    /// Sends a request through the authenticating path
    ///
    /// With a cached token the request is sent with a bearer header; any
    /// status other than 401 is returned directly. On 401, or when no token
    /// is cached yet, a login is performed and a clone of the original
    /// request (taken before the first attempt) is sent once with the new
    /// token. That second response is returned regardless of its status.
    pub async fn send(&self, http: &Client, mut request: Request) -> Result<Response, AppError> {
        // Clone before the first attempt; the request is consumed by send.
        let retry = request.try_clone().ok_or_else(|| {
            AppError::InvalidInput("request body cannot be cloned for reauthentication".to_string())
        })?;

        let token = self.credentials.token();
        if !token.is_empty() {
            debug!("Token found, using existing authentication");
            request
                .headers_mut()
                .insert(AUTHORIZATION, bearer_header(&token)?);
            let response = http.execute(request).await?;

            if response.status() != StatusCode::UNAUTHORIZED {
                return Ok(response);
            }
            debug!("Existing authentication expired, reauthenticating");
        } else {
            debug!("Unauthenticated, authenticating");
        }

        let token = self.login().await?;
        let mut retry = retry;
        retry
            .headers_mut()
            .insert(AUTHORIZATION, bearer_header(&token)?);
        Ok(http.execute(retry).await?)
    }
}

fn bearer_header(token: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| AppError::InvalidInput("token is not a valid header value".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_url_resolved_against_fabric_base() {
        let credentials = Arc::new(Credentials::new("user@example.com", "secret"));
        let auth = Authenticator::new(credentials, "https://fabric.example.com/api/v1/");
        assert_eq!(auth.login_url, "https://fabric.example.com/api/v1/login");
    }

    #[test]
    fn test_bearer_header_format() {
        let header = bearer_header("abc123").unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer abc123");
    }

    #[test]
    fn test_bearer_header_rejects_control_characters() {
        assert!(bearer_header("bad\ntoken").is_err());
    }
}
