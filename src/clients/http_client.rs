//! HTTP transport for ProductBoard API communication.
//!
//! This module provides the [`HttpClient`] type that actually puts requests
//! on the wire. It is built once from a [`ClientConfig`] and interprets the
//! transport-only options (TLS, proxy, cookies, timeout) the resource layer
//! never looks at.

use url::Url;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{ClientConfig, SslVerifyMode, SslVersion};

/// HTTP transport for making requests to the ProductBoard API.
///
/// The transport composes `site + path` (a path that is already a full
/// `http…` URL passes through untouched, for resource self-links), sends the
/// request with whatever headers it is handed, and maps non-2xx responses to
/// [`HttpError::Response`]. Header policy lives in [`crate::Client`], not
/// here.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Site prefix (e.g., `https://api.productboard.com`), no trailing slash.
    site: String,
    /// Pre-joined `Cookie` header from `additional_cookies`, if any.
    cookie_header: Option<String>,
    /// Basic-auth credentials, applied per request when a username is set.
    username: Option<String>,
    password: Option<String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new transport from validated configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client or a configured proxy cannot
    /// be created. This should only happen in extremely unusual
    /// circumstances (e.g., TLS initialization failure); the URL-shaped
    /// options, including the proxy scheme, are validated by
    /// [`crate::config::ClientConfigBuilder::build`] before this runs.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let mut builder = reqwest::Client::builder().use_rustls_tls();

        if config.ssl_verify_mode() == SslVerifyMode::None {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(version) = config.ssl_version() {
            let minimum = match version {
                SslVersion::Tls1_2 => reqwest::tls::Version::TLS_1_2,
                SslVersion::Tls1_3 => reqwest::tls::Version::TLS_1_3,
            };
            builder = builder.min_tls_version(minimum);
        }
        if config.use_cookies() {
            builder = builder.cookie_store(true);
        }
        if let Some(timeout) = config.read_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(proxy) = Self::build_proxy(config) {
            builder = builder.proxy(proxy);
        }

        let client = builder.build().expect("Failed to create HTTP client");

        let cookie_header = if config.additional_cookies().is_empty() {
            None
        } else {
            Some(config.additional_cookies().join("; "))
        };

        Self {
            client,
            site: config.site().to_string(),
            cookie_header,
            username: config.username().map(str::to_string),
            password: config.password().map(str::to_string),
        }
    }

    /// Builds the reqwest proxy from the configured address, port override,
    /// and credentials.
    fn build_proxy(config: &ClientConfig) -> Option<reqwest::Proxy> {
        let address = config.proxy_address()?;

        // The address parsed during config validation; a port option
        // overrides whatever the address carries.
        let url = Url::parse(address)
            .map(|mut url| {
                if let Some(port) = config.proxy_port() {
                    let _ = url.set_port(Some(port));
                }
                url.to_string()
            })
            .unwrap_or_else(|_| address.to_string());

        // A failure here must not fall back to a direct connection.
        let mut proxy = reqwest::Proxy::all(url).expect("Failed to create proxy from address");
        if let (Some(username), Some(password)) = (config.proxy_username(), config.proxy_password())
        {
            proxy = proxy.basic_auth(username, password);
        }
        Some(proxy)
    }

    /// Returns the site prefix for this transport.
    #[must_use]
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Sends an HTTP request to the ProductBoard API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request never completes, or
    /// [`HttpError::Response`] carrying the status code, reason phrase, and
    /// raw body if the server answers outside the 2xx range.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = if request.path.starts_with("http") {
            request.path.clone()
        } else {
            format!("{}{}", self.site, request.path)
        };

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Head => self.client.head(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        if let Some(username) = &self.username {
            req_builder = req_builder.basic_auth(username, self.password.as_deref());
        }
        if let Some(cookie) = &self.cookie_header {
            req_builder = req_builder.header("Cookie", cookie);
        }
        if let Some(headers) = &request.extra_headers {
            for (key, value) in headers {
                req_builder = req_builder.header(key, value);
            }
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let message = res
            .status()
            .canonical_reason()
            .map_or_else(|| format!("HTTP status {code}"), str::to_string);
        let body = res.text().await.unwrap_or_default();

        let response = HttpResponse::new(code, message, body);
        if response.is_ok() {
            Ok(response)
        } else {
            Err(HttpError::Response(HttpResponseError {
                code: response.code,
                message: response.message,
                body: response.body,
            }))
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("site", &self.site)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_takes_site_from_config() {
        let config = ClientConfig::builder()
            .site("https://api.productboard.com/")
            .build()
            .unwrap();
        let transport = HttpClient::new(&config);

        assert_eq!(transport.site(), "https://api.productboard.com");
    }

    #[test]
    fn test_additional_cookies_become_one_header() {
        let config = ClientConfig::builder()
            .additional_cookie("session=abc")
            .additional_cookie("region=eu")
            .build()
            .unwrap();
        let transport = HttpClient::new(&config);

        assert_eq!(
            transport.cookie_header.as_deref(),
            Some("session=abc; region=eu")
        );
    }

    #[test]
    fn test_no_cookie_header_without_additional_cookies() {
        let transport = HttpClient::new(&ClientConfig::default());
        assert!(transport.cookie_header.is_none());
    }

    #[test]
    fn test_basic_auth_credentials_carry_over_from_config() {
        let config = ClientConfig::builder()
            .username("svc-account")
            .password("s3cret")
            .build()
            .unwrap();
        let transport = HttpClient::new(&config);

        assert_eq!(transport.username.as_deref(), Some("svc-account"));
        assert_eq!(transport.password.as_deref(), Some("s3cret"));

        let anonymous = HttpClient::new(&ClientConfig::default());
        assert!(anonymous.username.is_none());
    }

    #[test]
    fn test_transport_builds_with_tls_and_proxy_options() {
        let config = ClientConfig::builder()
            .ssl_verify_mode(SslVerifyMode::None)
            .ssl_version(SslVersion::Tls1_2)
            .proxy_address("http://proxy.internal:8080")
            .proxy_username("user")
            .proxy_password("pass")
            .use_cookies(true)
            .build()
            .unwrap();

        // Construction exercises the full builder path.
        let transport = HttpClient::new(&config);
        assert_eq!(transport.site(), "https://api.productboard.com");
    }

    #[test]
    fn test_debug_does_not_leak_cookies() {
        let config = ClientConfig::builder()
            .additional_cookie("session=secret-value")
            .build()
            .unwrap();
        let transport = HttpClient::new(&config);

        let output = format!("{transport:?}");
        assert!(output.contains("site"));
        assert!(!output.contains("secret-value"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
