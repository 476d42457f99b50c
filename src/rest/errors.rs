//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for REST resource operations, extending
//! the transport-level [`HttpError`](crate::clients::HttpError) with
//! resource-specific semantics like `MissingRelation` and `Parse`.
//!
//! # Error Handling
//!
//! Resource operations can fail in three distinct ways:
//!
//! - **Construction**: [`ResourceError::MissingRelation`] - A declared parent
//!   key was not supplied
//! - **Decoding**: [`ResourceError::Parse`] /
//!   [`ResourceError::MissingCollectionKey`] - The response body doesn't have
//!   the expected shape
//! - **Transport**: [`ResourceError::Http`] - The request itself failed
//!
//! # Example
//!
//! ```rust,ignore
//! use productboard_api::rest::{ResourceError, ResourceType};
//! use productboard_api::rest::resources::Feature;
//!
//! match Feature::find(&client, "abc-123", None).await {
//!     Ok(feature) => println!("Found: {:?}", feature.attr("name")),
//!     Err(ResourceError::Http(e)) => println!("Request failed: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST resource operations.
///
/// This enum provides semantic error types for resource operations, covering
/// construction-time failures (missing parent keys), decoding failures
/// (unexpected response shapes), and wrapped transport errors.
///
/// # Example
///
/// ```rust
/// use productboard_api::rest::ResourceError;
///
/// let error = ResourceError::MissingRelation {
///     resource: "Comment",
///     relation: "feature",
/// };
/// assert!(error.to_string().contains("Comment"));
/// assert!(error.to_string().contains("feature"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A declared parent relation was not provided (construction failure).
    ///
    /// Resources that declare `BELONGS_TO` relations cannot exist without a
    /// key for each parent, because every path they generate is nested under
    /// those parents.
    #[error("{resource} belongs to '{relation}' but no '{relation}' key was provided")]
    MissingRelation {
        /// The type name of the resource (e.g., "Comment").
        resource: &'static str,
        /// The parent relation that was not supplied.
        relation: &'static str,
    },

    /// A relation name was requested that the resource does not declare.
    ///
    /// This error is returned by `has_one` / `has_many` accessors when the
    /// relation name doesn't match any declared descriptor.
    #[error("{resource} has no declared relation named '{relation}'")]
    UnknownRelation {
        /// The type name of the resource.
        resource: &'static str,
        /// The relation name that was requested.
        relation: String,
    },

    /// A collection response did not contain the declared collection key.
    ///
    /// Returned when listing resources whose API wraps the element array in
    /// an envelope object and the expected key is absent.
    #[error("collection response for {resource} is missing the '{key}' key")]
    MissingCollectionKey {
        /// The type name of the resource.
        resource: &'static str,
        /// The envelope key that was expected.
        key: &'static str,
    },

    /// An HTTP-level error occurred.
    ///
    /// This variant wraps [`HttpError`] for transport failures and non-2xx
    /// responses surfaced by the underlying client.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A response body could not be parsed as the expected JSON shape.
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
