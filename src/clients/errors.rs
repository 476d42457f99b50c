//! HTTP-specific error types.
//!
//! This module contains the errors the transport can produce: non-2xx
//! responses and network failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: the server answered outside the 2xx range. The
//!   raw response body rides along so callers can inspect (or, in the
//!   resource layer, re-parse) whatever the API said.
//! - [`HttpError`]: unified error type for transport operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use productboard_api::{HttpError, HttpMethod, HttpRequest};
//!
//! match client.get("/features/42", None).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.body);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// Carries the status code, the status message (reason phrase), and the raw
/// response body. The body is kept as unparsed text: error bodies are not
/// guaranteed to be JSON, and the resource layer decides what to make of
/// them.
///
/// # Example
///
/// ```rust
/// use productboard_api::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Not Found".to_string(),
///     body: r#"{"errors":{"feature":"does not exist"}}"#.to_string(),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 404: Not Found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The status message (reason phrase) of the response.
    pub message: String,
    /// The raw response body text.
    pub body: String,
}

/// Unified error type for all HTTP-related errors.
///
/// Use pattern matching to distinguish an answer the server gave
/// ([`HttpError::Response`]) from a request that never completed
/// ([`HttpError::Network`]).
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
