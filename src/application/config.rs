use crate::constants::{
    CORE_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_INACTIVITY_TIMEOUT_SECS,
    DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_PAGES, DEFAULT_RATE_LIMIT_BURST_SIZE,
    DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
    DEFAULT_TRANSFER_TIMEOUT_SECS, FABRIC_BASE_URL,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

/// Logical API families served by the platform, each with its own base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    /// The core API: scripts, data pools, flow runs, scheduled flows
    Core,
    /// The fabric API, which also hosts the login service
    Fabric,
}

impl Api {
    /// Default production base URL for this API family
    #[must_use]
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Api::Core => CORE_BASE_URL,
            Api::Fabric => FABRIC_BASE_URL,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Login credentials for the Patchworks API
pub struct CredentialsConfig {
    /// Username (email) for the Patchworks account
    pub username: String,
    /// Password for the Patchworks account
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for one REST API family
pub struct RestApiConfig {
    /// Base URL for the API family
    pub base_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Per-request options shared by every call issued through one client
///
/// Immutable per client instance; the `with_*` methods produce a new value
/// with one field overridden, leaving the original unchanged. A client
/// derived with overridden options sees only the new set.
pub struct RequestOptions {
    /// Number of items requested per page for collection endpoints
    pub items_per_page: u32,
    /// Hard ceiling on pages fetched by one sequence; `None` means unbounded
    pub max_pages: Option<u32>,
    /// TCP connect timeout in seconds
    pub connect_timeout: u64,
    /// Transfer timeout in seconds for a single request
    pub transfer_timeout: u64,
    /// Inactivity (read) timeout in seconds
    pub inactivity_timeout: u64,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_pages: Some(DEFAULT_MAX_PAGES),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT_SECS,
            transfer_timeout: DEFAULT_TRANSFER_TIMEOUT_SECS,
            inactivity_timeout: DEFAULT_INACTIVITY_TIMEOUT_SECS,
        }
    }
}

impl RequestOptions {
    /// Returns a copy with a different page size
    #[must_use]
    pub fn with_items_per_page(mut self, items_per_page: u32) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Returns a copy with a different page ceiling; `None` removes the ceiling
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Returns a copy with a different connect timeout in seconds
    #[must_use]
    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout = secs;
        self
    }

    /// Returns a copy with a different transfer timeout in seconds
    #[must_use]
    pub fn with_transfer_timeout(mut self, secs: u64) -> Self {
        self.transfer_timeout = secs;
        self
    }

    /// Returns a copy with a different inactivity timeout in seconds
    #[must_use]
    pub fn with_inactivity_timeout(mut self, secs: u64) -> Self {
        self.inactivity_timeout = secs;
        self
    }

    /// Transfer timeout as a [`Duration`], applied per request
    #[must_use]
    pub fn transfer_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.transfer_timeout)
    }

    /// Connect timeout as a [`Duration`]
    #[must_use]
    pub fn connect_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    /// Inactivity timeout as a [`Duration`]
    #[must_use]
    pub fn inactivity_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.inactivity_timeout)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Patchworks API client
pub struct Config {
    /// Login credentials
    pub credentials: CredentialsConfig,
    /// Core API configuration
    pub core_api: RestApiConfig,
    /// Fabric API configuration
    pub fabric_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Request options applied to every client built from this config
    pub request_options: RequestOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables
    ///
    /// Loads `.env` first, then reads `PW_*` variables, logging an error
    /// for missing credentials and falling back to documented defaults for
    /// everything else. `PW_MAX_PAGES=0` removes the page ceiling.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("PW_USERNAME", String::from("default_username"));
        let password = get_env_or_default("PW_PASSWORD", String::from("default_password"));

        if username == "default_username" {
            error!("PW_USERNAME not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("PW_PASSWORD not found in environment variables or .env file");
        }

        let max_pages = match get_env_or_default("PW_MAX_PAGES", DEFAULT_MAX_PAGES) {
            0 => None,
            pages => Some(pages),
        };

        Config {
            credentials: CredentialsConfig { username, password },
            core_api: RestApiConfig {
                base_url: get_env_or_default(
                    "PW_CORE_BASE_URL",
                    String::from(Api::Core.default_base_url()),
                ),
            },
            fabric_api: RestApiConfig {
                base_url: get_env_or_default(
                    "PW_FABRIC_BASE_URL",
                    String::from(Api::Fabric.default_base_url()),
                ),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "PW_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "PW_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "PW_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
            request_options: RequestOptions {
                items_per_page: get_env_or_default("PW_ITEMS_PER_PAGE", DEFAULT_ITEMS_PER_PAGE),
                max_pages,
                connect_timeout: get_env_or_default(
                    "PW_CONNECT_TIMEOUT",
                    DEFAULT_CONNECT_TIMEOUT_SECS,
                ),
                transfer_timeout: get_env_or_default(
                    "PW_TRANSFER_TIMEOUT",
                    DEFAULT_TRANSFER_TIMEOUT_SECS,
                ),
                inactivity_timeout: get_env_or_default(
                    "PW_INACTIVITY_TIMEOUT",
                    DEFAULT_INACTIVITY_TIMEOUT_SECS,
                ),
            },
        }
    }
}
