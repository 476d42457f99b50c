//! Error types for client configuration.
//!
//! This module contains the errors raised while building a [`crate::config::ClientConfig`].
//! Errors from HTTP calls and from the resource layer live in
//! [`crate::clients::HttpError`] and [`crate::rest::ResourceError`] respectively.
//!
//! # Error Handling
//!
//! The configuration builder returns `Result<T, ConfigError>` to enable
//! fail-fast validation: a client is never constructed from options that
//! cannot work.
//!
//! # Example
//!
//! ```rust
//! use productboard_api::{ClientConfig, ConfigError};
//!
//! let result = ClientConfig::builder().site("not a url").build();
//! assert!(matches!(result, Err(ConfigError::InvalidSite { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while validating client configuration.
///
/// Each variant corresponds to an option combination the client refuses to
/// start with. The messages are written to be actionable on their own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Site URL is missing or unparseable.
    #[error("Invalid site '{site}'. Please provide an absolute URL with scheme (e.g., 'https://api.productboard.com').")]
    InvalidSite {
        /// The invalid site value that was provided.
        site: String,
    },

    /// Authentication type is not supported.
    #[error("Unsupported auth type '{auth_type}'. Only 'basic' (bearer token via default headers) is supported.")]
    UnsupportedAuthType {
        /// The unsupported auth type that was requested.
        auth_type: String,
    },

    /// Proxy address is unparseable or uses a scheme the transport cannot
    /// drive.
    #[error("Invalid proxy address '{address}'. Expected an absolute http(s) URL (e.g., 'http://proxy.internal:8080').")]
    InvalidProxyAddress {
        /// The invalid proxy address that was provided.
        address: String,
    },
}
