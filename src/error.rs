/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

//! Error types for the Patchworks API client
//!
//! All failures surface to the immediate caller of the triggering operation.
//! The only automatic recovery anywhere in the crate is the single
//! reauthentication-and-resend performed on a 401 response.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The response status did not match the status the caller expected.
    /// Never retried; carries the observed and expected codes and the URL.
    #[error("unexpected response code {got} (expected {expected}) for {url}")]
    UnexpectedStatus {
        /// Status code observed on the response
        got: StatusCode,
        /// Status code the caller expected
        expected: StatusCode,
        /// URL of the failed request
        url: String,
    },

    /// The login exchange did not return success. Fatal for the call in
    /// progress; not retried.
    #[error("could not authenticate: login returned {status}")]
    AuthenticationFailed {
        /// Status code returned by the login endpoint
        status: StatusCode,
    },

    /// Response body present but not valid JSON, or an expected envelope
    /// key was missing where required
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Network, connection or timeout error from the underlying transport
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid caller-supplied input, such as an endpoint that does not
    /// form a valid URL against the configured base
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}
