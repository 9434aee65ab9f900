/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

//! # Patchworks API Client
//!
//! Async Rust client for the Patchworks integration platform. The crate
//! handles the request plumbing shared by every endpoint:
//! - Lazy authentication with transparent re-login on token expiry
//! - Rate limiting of outbound requests against one shared budget
//! - Strict status validation and JSON envelope unwrapping
//! - Multi-page result sets exposed as a single lazy, bounded sequence
//!
//! # Example
//! ```ignore
//! use pw_client::prelude::*;
//!
//! let config = Config::new();
//! let builder = ClientBuilder::from_config(&config);
//! let core = builder.core_client()?;
//!
//! // Authentication happens on the first request
//! let mut scripts = core.get_scripts();
//! while let Some(script) = scripts.next().await {
//!     println!("{}", script?["name"]);
//! }
//! ```

/// Client builder, configuration, service traits and rate limiting
pub mod application;
/// Global constants and defaults
pub mod constants;
/// Error types
pub mod error;
/// Request execution, pagination and shared models
pub mod model;
/// Commonly used types and traits in one import
pub mod prelude;
/// Clients for the core and fabric API families
pub mod presentation;
/// Credentials and the authentication flow
pub mod session;
/// Environment and logging helpers
pub mod utils;

/// Crate version as compiled
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
