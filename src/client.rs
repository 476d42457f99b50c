//! Top-level ProductBoard API client.
//!
//! This module provides the [`Client`] type, which owns the validated
//! configuration and the HTTP transport, exposes raw verb methods (`get`,
//! `post`, `put`, `delete`, `head`), and hands out typed
//! [`ResourceFactory`] handles for the shipped resources.
//!
//! # Example
//!
//! ```rust,ignore
//! use productboard_api::{Client, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .bearer_token("my-api-token")
//!     .build()?;
//! let client = Client::new(config);
//!
//! // Typed access through a factory
//! let features = client.features().all(None).await?;
//!
//! // Raw access for endpoints without a resource type
//! let response = client.get("/webhooks", None).await?;
//! ```

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::ClientConfig;
use crate::rest::resources::{Component, Feature, Version};
use crate::rest::{ResourceFactory, ResourceType};

/// Client for the ProductBoard REST API.
///
/// Wraps a [`ClientConfig`] and the transport built from it. All resource
/// operations borrow the client, so a single instance can serve any number
/// of factories and in-flight requests.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`, making it safe to share across async tasks.
pub struct Client {
    /// The validated configuration this client was built from.
    config: ClientConfig,
    /// The internal HTTP client for making requests.
    request_client: HttpClient,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a new client from validated configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created; see
    /// [`HttpClient::new`]. The URL-shaped options are validated by
    /// [`crate::config::ClientConfigBuilder::build`], so this only occurs
    /// on TLS initialization failure.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = ClientConfig::builder()
    ///     .bearer_token("my-api-token")
    ///     .build()?;
    /// let client = Client::new(config);
    /// ```
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let request_client = HttpClient::new(&config);
        Self {
            config,
            request_client,
        }
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns a factory for an arbitrary resource type.
    ///
    /// Prefer the named accessors ([`features`](Self::features),
    /// [`versions`](Self::versions), [`components`](Self::components)) for
    /// the shipped resources; this is the extension point for downstream
    /// resource types.
    #[must_use]
    pub const fn factory<T: ResourceType>(&self) -> ResourceFactory<'_, T> {
        ResourceFactory::new(self)
    }

    /// Returns a factory for [`Feature`] resources.
    #[must_use]
    pub const fn features(&self) -> ResourceFactory<'_, Feature> {
        self.factory()
    }

    /// Returns a factory for [`Version`] resources.
    #[must_use]
    pub const fn versions(&self) -> ResourceFactory<'_, Version> {
        self.factory()
    }

    /// Returns a factory for [`Component`] resources.
    #[must_use]
    pub const fn components(&self) -> ResourceFactory<'_, Component> {
        self.factory()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - A site-relative path (e.g., "/features/42") or an
    ///   absolute URL
    /// * `headers` - Optional headers merged over the configured defaults
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for non-2xx responses and
    /// [`HttpError::Network`] for transport failures.
    pub async fn get(
        &self,
        path: &str,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.request(
            HttpMethod::Get,
            path,
            None,
            self.merge_default_headers(headers.unwrap_or_default()),
        )
        .await
    }

    /// Sends a HEAD request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for non-2xx responses and
    /// [`HttpError::Network`] for transport failures.
    pub async fn head(
        &self,
        path: &str,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.request(
            HttpMethod::Head,
            path,
            None,
            self.merge_default_headers(headers.unwrap_or_default()),
        )
        .await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// A `Content-Type: application/json` header is supplied unless the
    /// call provides its own; either one takes precedence over a
    /// `Content-Type` among the configured default headers.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for non-2xx responses and
    /// [`HttpError::Network`] for transport failures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = serde_json::json!({"name": "Dark mode"});
    /// let response = client.post("/features", body, None).await?;
    /// ```
    pub async fn post(
        &self,
        path: &str,
        body: Value,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.request(
            HttpMethod::Post,
            path,
            Some(body),
            self.merge_default_headers(Self::content_type_headers(headers.unwrap_or_default())),
        )
        .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// Header handling matches [`post`](Self::post).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for non-2xx responses and
    /// [`HttpError::Network`] for transport failures.
    pub async fn put(
        &self,
        path: &str,
        body: Value,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.request(
            HttpMethod::Put,
            path,
            Some(body),
            self.merge_default_headers(Self::content_type_headers(headers.unwrap_or_default())),
        )
        .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for non-2xx responses and
    /// [`HttpError::Network`] for transport failures.
    pub async fn delete(
        &self,
        path: &str,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.request(
            HttpMethod::Delete,
            path,
            None,
            self.merge_default_headers(headers.unwrap_or_default()),
        )
        .await
    }

    /// Builds and sends a request through the transport.
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        headers: HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        if self.config.http_debug() {
            match &body {
                Some(body) => {
                    tracing::debug!("Sending {} request to {} with body {}", method, path, body);
                }
                None => tracing::debug!("Sending {} request to {}", method, path),
            }
        }

        let mut builder = HttpRequest::builder(method, path).extra_headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.request_client.request(builder.build()).await
    }

    /// Merges request headers over the configured defaults.
    ///
    /// Precedence, lowest first: the `Accept: application/json` seed, then
    /// the configured default headers, then the per-call headers.
    fn merge_default_headers(&self, headers: HashMap<String, String>) -> HashMap<String, String> {
        let mut merged = HashMap::from([("Accept".to_string(), "application/json".to_string())]);
        merged.extend(
            self.config
                .default_headers()
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        merged.extend(headers);
        merged
    }

    /// Seeds a `Content-Type: application/json` header under the per-call
    /// headers for body-carrying requests.
    fn content_type_headers(headers: HashMap<String, String>) -> HashMap<String, String> {
        let mut seeded = HashMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]);
        seeded.extend(headers);
        seeded
    }
}

impl Default for Client {
    /// Creates a client with the default configuration.
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

// Manual impl: the transport has no useful debug output; the config already
// masks its secrets.
impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
