/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! HTTP request execution against one Patchworks API family
//!
//! [`ApiClient`] builds and issues single requests: resolve the endpoint
//! against the base URL, encode query and JSON body, pass the rate gate,
//! send through the authenticating path, validate the status code and
//! unwrap the response envelope. Collection endpoints go through
//! [`ApiClient::items`], which returns a lazy paginated sequence instead.

use crate::application::config::RequestOptions;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::paging::PagedItems;
use crate::session::auth::Authenticator;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode, Url};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Request executor for one API family
///
/// Cheap to clone pieces are shared: the authenticator and the rate gate
/// come from the builder and are common to every client derived from it.
pub struct ApiClient {
    http: Client,
    base_url: String,
    auth: Arc<Authenticator>,
    limiter: Option<Arc<RateLimiter>>,
    options: RequestOptions,
}

impl ApiClient {
    /// Creates an executor for the given base URL
    ///
    /// The underlying HTTP client is built from the connect and inactivity
    /// timeouts in `options`; the transfer timeout is applied per request.
    pub fn new(
        base_url: impl Into<String>,
        auth: Arc<Authenticator>,
        limiter: Option<Arc<RateLimiter>>,
        options: RequestOptions,
    ) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(options.connect_timeout_duration())
            .read_timeout(options.inactivity_timeout_duration())
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            auth,
            limiter,
            options,
        })
    }

    /// Request options this client was built with
    #[must_use]
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Derives a client with merged option overrides
    ///
    /// The original client keeps its options; the derived one gets a fresh
    /// HTTP client honoring the new timeouts. Authenticator and rate gate
    /// stay shared.
    pub fn with_options(&self, options: RequestOptions) -> Result<Self, AppError> {
        Self::new(
            self.base_url.clone(),
            self.auth.clone(),
            self.limiter.clone(),
            options,
        )
    }

    /// Executes a single request and unwraps the response envelope
    ///
    /// # Arguments
    /// * `endpoint` - Path resolved against the client's base URL
    /// * `expect_status` - The only status code accepted as success
    /// * `method` - HTTP method
    /// * `query` - Query parameters, URL-encoded in the given order
    /// * `body` - JSON request body, sent with a JSON content type
    /// * `unwrap_key` - `Some(key)` returns `decoded[key]` (`Null` when the
    ///   key is absent); `None` returns the decoded top-level value as-is
    ///
    /// # Returns
    /// * `Ok(Value)` - Unwrapped response value; `Null` for an empty body
    /// * `Err(AppError)` - Status mismatch, transport or decode failure
    pub async fn query(
        &self,
        endpoint: &str,
        expect_status: StatusCode,
        method: Method,
        query: Option<&[(&str, String)]>,
        body: Option<&Value>,
        unwrap_key: Option<&str>,
    ) -> Result<Value, AppError> {
        let mut url = self.resolve(endpoint)?;
        if let Some(pairs) = query {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        }

        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, url.clone())
            .timeout(self.options.transfer_timeout_duration())
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").json(body);
        }
        let request = request.build()?;

        if let Some(limiter) = &self.limiter {
            limiter.wait_for_slot().await;
        }
        let response = self.auth.send(&self.http, request).await?;

        let status = response.status();
        if status != expect_status {
            return Err(AppError::UnexpectedStatus {
                got: status,
                expected: expect_status,
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(Value::Null);
        }

        let decoded: Value = serde_json::from_str(&text)?;
        Ok(match unwrap_key {
            Some(key) => decoded.get(key).cloned().unwrap_or(Value::Null),
            None => decoded,
        })
    }

    /// Returns a lazy paginated sequence over a collection endpoint
    ///
    /// Nothing is fetched until the sequence is first polled.
    #[must_use]
    pub fn items(&self, endpoint: &str, query: Vec<(String, String)>) -> PagedItems {
        self.items_with_options(endpoint, query, self.options.clone())
    }

    /// Same as [`ApiClient::items`] but with per-sequence option overrides,
    /// used by callers that need a different page ceiling for one listing
    #[must_use]
    pub fn items_with_options(
        &self,
        endpoint: &str,
        query: Vec<(String, String)>,
        options: RequestOptions,
    ) -> PagedItems {
        PagedItems::new(
            self.http.clone(),
            self.auth.clone(),
            self.limiter.clone(),
            self.base_url.clone(),
            endpoint.to_string(),
            query,
            options,
        )
    }

    fn resolve(&self, endpoint: &str) -> Result<Url, AppError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        Url::parse(&url).map_err(|e| AppError::InvalidInput(format!("invalid URL {url}: {e}")))
    }
}
