//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type returned by the transport.
//! Bodies stay as raw text: the resource layer owns JSON decoding, so that
//! parse failures surface where they can be handled (or captured into
//! resource attributes).

/// An HTTP response from the ProductBoard API.
///
/// # Example
///
/// ```rust
/// use productboard_api::HttpResponse;
///
/// let response = HttpResponse::new(200, "OK", r#"{"id":"42"}"#);
/// assert!(response.is_ok());
/// assert_eq!(response.body, r#"{"id":"42"}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The status message (reason phrase), e.g. `OK` or `Not Found`.
    pub message: String,
    /// The raw response body text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, message: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }
}
