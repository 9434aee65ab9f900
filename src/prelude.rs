/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! # Patchworks Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library.
//!
//! ## Usage
//!
//! ```rust
//! use pw_client::prelude::*;
//!
//! let credentials = Arc::new(Credentials::new("user@example.com", "secret"));
//! let builder = ClientBuilder::new(credentials);
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Patchworks API client
pub use crate::application::config::{
    Api, Config, CredentialsConfig, RateLimiterConfig, RequestOptions, RestApiConfig,
};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT CONSTRUCTION
// ============================================================================

/// Builder wiring credentials, rate gate and options into API clients
pub use crate::application::client::ClientBuilder;

/// Clients for the two API families
pub use crate::presentation::{CoreClient, FabricClient};

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// Shared credentials with the bearer token slot
pub use crate::session::credentials::Credentials;

/// Authentication manager performing the login exchange
pub use crate::session::auth::Authenticator;

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

/// Data pool operations
pub use crate::application::interfaces::DataPoolService;

/// Flow run, payload and scheduled flow operations
pub use crate::application::interfaces::FlowService;

/// Script and script version operations
pub use crate::application::interfaces::ScriptService;

// ============================================================================
// PAGINATION AND MODELS
// ============================================================================

/// Lazy paginated item sequence
pub use crate::model::paging::PagedItems;

/// Request executor for one API family
pub use crate::model::http::ApiClient;

/// API enums and envelope metadata
pub use crate::model::types::{FlowRunStatus, PageMeta, PoolEntity};

// ============================================================================
// UTILITIES
// ============================================================================

/// Rate limiting
pub use crate::application::rate_limiter::RateLimiter;

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest types used in the query surface
pub use reqwest::{Method, StatusCode};
