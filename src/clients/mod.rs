//! HTTP transport types for ProductBoard API communication.
//!
//! This module provides the foundational HTTP layer the resource mapping is
//! built on. It deliberately knows nothing about resources or header policy:
//! [`crate::Client`] decides what to send, the types here describe requests
//! and put them on the wire.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: the async transport built once from configuration
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a raw-bodied response from the API
//! - [`HttpMethod`]: supported HTTP methods (GET, HEAD, POST, PUT, DELETE)
//! - [`HttpError`]: transport failures (non-2xx responses and network errors)
//!
//! # Example
//!
//! ```rust,ignore
//! use productboard_api::{ClientConfig, HttpMethod, HttpRequest};
//! use productboard_api::clients::HttpClient;
//!
//! let config = ClientConfig::builder().build()?;
//! let transport = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/features").build();
//! let response = transport.request(request).await?;
//! ```

pub mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
