/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Client construction
//!
//! [`ClientBuilder`] wires the shared pieces together: one [`Credentials`]
//! value with its token slot, an optional rate gate and a request options
//! bundle. Clients for the core and fabric API families built from the same
//! builder share all three, so a login performed through one client is
//! visible to the other and every request draws from the same rate budget.

use crate::application::config::{Api, Config, RequestOptions};
use crate::application::rate_limiter::RateLimiter;
use crate::error::AppError;
use crate::model::http::ApiClient;
use crate::presentation::core::CoreClient;
use crate::presentation::fabric::FabricClient;
use crate::session::auth::Authenticator;
use crate::session::credentials::Credentials;
use std::sync::Arc;

/// Builder producing API clients that share credentials, rate gate and options
#[derive(Clone)]
pub struct ClientBuilder {
    credentials: Arc<Credentials>,
    limiter: Option<Arc<RateLimiter>>,
    options: RequestOptions,
    core_base_url: String,
    fabric_base_url: String,
}

impl ClientBuilder {
    /// Creates a builder with default options, production base URLs and no
    /// rate gate
    #[must_use]
    pub fn new(credentials: Arc<Credentials>) -> Self {
        Self {
            credentials,
            limiter: None,
            options: RequestOptions::default(),
            core_base_url: Api::Core.default_base_url().to_string(),
            fabric_base_url: Api::Fabric.default_base_url().to_string(),
        }
    }

    /// Creates a builder from an environment-driven [`Config`], with a rate
    /// gate built from the configured limits
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            credentials: Arc::new(Credentials::new(
                config.credentials.username.clone(),
                config.credentials.password.clone(),
            )),
            limiter: Some(Arc::new(RateLimiter::new(&config.rate_limiter))),
            options: config.request_options.clone(),
            core_base_url: config.core_api.base_url.clone(),
            fabric_base_url: config.fabric_api.base_url.clone(),
        }
    }

    /// Installs a shared rate gate
    #[must_use]
    pub fn with_rate_limiter(mut self, limiter: Arc<RateLimiter>) -> Self {
        self.limiter = Some(limiter);
        self
    }

    /// Replaces the request options bundle
    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Overrides the core API base URL
    #[must_use]
    pub fn with_core_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.core_base_url = base_url.into();
        self
    }

    /// Overrides the fabric API base URL, which also moves the login endpoint
    #[must_use]
    pub fn with_fabric_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.fabric_base_url = base_url.into();
        self
    }

    /// The shared credentials, for inspecting the token after a login
    #[must_use]
    pub fn credentials(&self) -> Arc<Credentials> {
        self.credentials.clone()
    }

    /// Builds a client for the core API
    pub fn core_client(&self) -> Result<CoreClient, AppError> {
        Ok(CoreClient::new(self.api_client(Api::Core)?))
    }

    /// Builds a client for the fabric API
    pub fn fabric_client(&self) -> Result<FabricClient, AppError> {
        Ok(FabricClient::new(self.api_client(Api::Fabric)?))
    }

    fn api_client(&self, api: Api) -> Result<ApiClient, AppError> {
        let auth = Arc::new(Authenticator::new(
            self.credentials.clone(),
            &self.fabric_base_url,
        ));

        let base_url = match api {
            Api::Core => self.core_base_url.clone(),
            Api::Fabric => self.fabric_base_url.clone(),
        };

        ApiClient::new(base_url, auth, self.limiter.clone(), self.options.clone())
    }
}
