use crate::application::config::RequestOptions;
use crate::error::AppError;
use crate::model::http::ApiClient;
use crate::model::paging::PagedItems;
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// Client for the fabric API family
///
/// The fabric API hosts the login service and a handful of tenant-level
/// resources; this client exposes the generic query surface against the
/// fabric base URL without a typed endpoint layer.
pub struct FabricClient {
    api: ApiClient,
}

impl FabricClient {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The underlying request executor
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Executes a single request against the fabric API
    pub async fn query(
        &self,
        endpoint: &str,
        expect_status: StatusCode,
        method: Method,
        query: Option<&[(&str, String)]>,
        body: Option<&Value>,
        unwrap_key: Option<&str>,
    ) -> Result<Value, AppError> {
        self.api
            .query(endpoint, expect_status, method, query, body, unwrap_key)
            .await
    }

    /// Returns a lazy paginated sequence over a fabric collection endpoint
    #[must_use]
    pub fn items(&self, endpoint: &str, query: Vec<(String, String)>) -> PagedItems {
        self.api.items(endpoint, query)
    }

    /// Derives a client with merged option overrides; the original keeps its own
    pub fn with_options(&self, options: RequestOptions) -> Result<Self, AppError> {
        Ok(Self::new(self.api.with_options(options)?))
    }
}
