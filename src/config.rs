//! Configuration types for the ProductBoard API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: the frozen option set a [`crate::Client`] is built from
//! - [`ClientConfigBuilder`]: a builder that validates options before a client
//!   can exist
//! - [`AuthType`]: the supported authentication scheme
//! - [`SslVerifyMode`] / [`SslVersion`]: TLS options passed through to the
//!   transport
//!
//! Options mirror the ProductBoard REST surface: a `site` URL, an optional
//! `context_path` and `rest_base_path` that together form the prefix of every
//! resource path, bearer credentials carried in `default_headers`, and
//! transport tuning (proxy, TLS, cookies, timeout) the resource layer never
//! looks at. The effective REST base path is computed once in
//! [`ClientConfigBuilder::build`] and never changes afterwards.
//!
//! # Example
//!
//! ```rust
//! use productboard_api::ClientConfig;
//!
//! let config = ClientConfig::builder()
//!     .default_header("Authorization", "Bearer my-token")
//!     .default_header("X-Version", "1")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.site(), "https://api.productboard.com");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Default API host used when no site is configured.
pub const DEFAULT_SITE: &str = "https://api.productboard.com";

/// Supported authentication schemes.
///
/// Only [`AuthType::Basic`] exists: credentials ride in a caller-supplied
/// `Authorization` default header (typically `Bearer <token>`). Parsing any
/// other name fails, so configuration loaded from strings surfaces
/// unsupported schemes early instead of silently ignoring them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthType {
    /// Header-based authentication via `default_headers`.
    #[default]
    Basic,
}

impl FromStr for AuthType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("basic") {
            Ok(Self::Basic)
        } else {
            Err(ConfigError::UnsupportedAuthType {
                auth_type: s.to_string(),
            })
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
        }
    }
}

/// TLS peer-verification modes accepted by the transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SslVerifyMode {
    /// Verify the server certificate (the default).
    #[default]
    Peer,
    /// Accept any certificate. Intended for test servers only.
    None,
}

/// Minimum TLS protocol versions accepted by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SslVersion {
    /// TLS 1.2.
    Tls1_2,
    /// TLS 1.3.
    Tls1_3,
}

/// Configuration for a ProductBoard API [`crate::Client`].
///
/// Frozen once built: every accessor is read-only and the effective REST base
/// path (`context_path` + `rest_base_path`) is computed a single time in the
/// builder.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone)]
pub struct ClientConfig {
    site: String,
    context_path: String,
    rest_base_path: String,
    auth_type: AuthType,
    username: Option<String>,
    password: Option<String>,
    proxy_address: Option<String>,
    proxy_port: Option<u16>,
    proxy_username: Option<String>,
    proxy_password: Option<String>,
    use_ssl: bool,
    ssl_verify_mode: SslVerifyMode,
    ssl_version: Option<SslVersion>,
    use_cookies: bool,
    additional_cookies: Vec<String>,
    default_headers: HashMap<String, String>,
    read_timeout: Option<Duration>,
    http_debug: bool,
    shared_secret: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use productboard_api::ClientConfig;
    ///
    /// let config = ClientConfig::builder()
    ///     .site("https://api.productboard.example")
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the site URL, normalized without a trailing slash.
    #[must_use]
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Returns the context path as configured.
    #[must_use]
    pub fn context_path(&self) -> &str {
        &self.context_path
    }

    /// Returns the effective REST base path (`context_path` +
    /// `rest_base_path` as configured), prepended to every derived resource
    /// path.
    #[must_use]
    pub fn rest_base_path(&self) -> &str {
        &self.rest_base_path
    }

    /// Returns the authentication scheme.
    #[must_use]
    pub const fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    /// Returns the configured username, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the configured password, if any.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns the proxy address, if any.
    #[must_use]
    pub fn proxy_address(&self) -> Option<&str> {
        self.proxy_address.as_deref()
    }

    /// Returns the proxy port, if any.
    #[must_use]
    pub const fn proxy_port(&self) -> Option<u16> {
        self.proxy_port
    }

    /// Returns the proxy username, if any.
    #[must_use]
    pub fn proxy_username(&self) -> Option<&str> {
        self.proxy_username.as_deref()
    }

    /// Returns the proxy password, if any.
    #[must_use]
    pub fn proxy_password(&self) -> Option<&str> {
        self.proxy_password.as_deref()
    }

    /// Returns whether a scheme-less site falls back to HTTPS.
    #[must_use]
    pub const fn use_ssl(&self) -> bool {
        self.use_ssl
    }

    /// Returns the TLS peer-verification mode.
    #[must_use]
    pub const fn ssl_verify_mode(&self) -> SslVerifyMode {
        self.ssl_verify_mode
    }

    /// Returns the minimum TLS version, if pinned.
    #[must_use]
    pub const fn ssl_version(&self) -> Option<SslVersion> {
        self.ssl_version
    }

    /// Returns whether the transport keeps a cookie store.
    #[must_use]
    pub const fn use_cookies(&self) -> bool {
        self.use_cookies
    }

    /// Returns cookies sent verbatim with every request.
    #[must_use]
    pub fn additional_cookies(&self) -> &[String] {
        &self.additional_cookies
    }

    /// Returns the headers merged into every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the read timeout, if any.
    #[must_use]
    pub const fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    /// Returns whether request logging is enabled.
    #[must_use]
    pub const fn http_debug(&self) -> bool {
        self.http_debug
    }

    /// Returns the shared secret, if any.
    #[must_use]
    pub fn shared_secret(&self) -> Option<&str> {
        self.shared_secret.as_deref()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // The default option set is always valid.
        ClientConfigBuilder::new()
            .build()
            .unwrap_or_else(|_| unreachable!("default configuration is valid"))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: HashMap<&str, &str> = self
            .default_headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case("authorization") {
                    (key.as_str(), "*****")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("ClientConfig")
            .field("site", &self.site)
            .field("context_path", &self.context_path)
            .field("rest_base_path", &self.rest_base_path)
            .field("auth_type", &self.auth_type)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "*****"))
            .field("proxy_address", &self.proxy_address)
            .field("proxy_port", &self.proxy_port)
            .field("proxy_username", &self.proxy_username)
            .field("proxy_password", &self.proxy_password.as_ref().map(|_| "*****"))
            .field("use_ssl", &self.use_ssl)
            .field("ssl_verify_mode", &self.ssl_verify_mode)
            .field("ssl_version", &self.ssl_version)
            .field("use_cookies", &self.use_cookies)
            .field("additional_cookies", &self.additional_cookies)
            .field("default_headers", &headers)
            .field("read_timeout", &self.read_timeout)
            .field("http_debug", &self.http_debug)
            .field("shared_secret", &self.shared_secret.as_ref().map(|_| "*****"))
            .finish()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Every option has a default, so `ClientConfig::builder().build()` already
/// yields a working configuration pointed at the public ProductBoard API.
///
/// # Defaults
///
/// - `site`: [`DEFAULT_SITE`]
/// - `context_path` / `rest_base_path`: empty
/// - `auth_type`: [`AuthType::Basic`]
/// - `use_ssl`: `true`, `ssl_verify_mode`: [`SslVerifyMode::Peer`]
/// - `use_cookies` / `http_debug`: `false`
/// - everything else unset
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use productboard_api::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .site("https://api.productboard.com")
///     .rest_base_path("/v1")
///     .default_header("Authorization", "Bearer token")
///     .read_timeout(Duration::from_secs(30))
///     .http_debug(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.rest_base_path(), "/v1");
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    site: Option<String>,
    context_path: Option<String>,
    rest_base_path: Option<String>,
    auth_type: Option<AuthType>,
    username: Option<String>,
    password: Option<String>,
    proxy_address: Option<String>,
    proxy_port: Option<u16>,
    proxy_username: Option<String>,
    proxy_password: Option<String>,
    use_ssl: Option<bool>,
    ssl_verify_mode: Option<SslVerifyMode>,
    ssl_version: Option<SslVersion>,
    use_cookies: Option<bool>,
    additional_cookies: Vec<String>,
    default_headers: HashMap<String, String>,
    read_timeout: Option<Duration>,
    http_debug: Option<bool>,
    shared_secret: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the site URL (scheme, host, optional port).
    ///
    /// A value without a scheme is completed with `https://` (or `http://`
    /// when [`Self::use_ssl`] is disabled). Trailing slashes are stripped so
    /// path concatenation and self-link stripping agree on one spelling.
    #[must_use]
    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Sets the context path prepended to the REST base path.
    #[must_use]
    pub fn context_path(mut self, path: impl Into<String>) -> Self {
        self.context_path = Some(path.into());
        self
    }

    /// Sets the REST base path prefixed to every resource path.
    #[must_use]
    pub fn rest_base_path(mut self, path: impl Into<String>) -> Self {
        self.rest_base_path = Some(path.into());
        self
    }

    /// Sets the authentication scheme.
    #[must_use]
    pub const fn auth_type(mut self, auth_type: AuthType) -> Self {
        self.auth_type = Some(auth_type);
        self
    }

    /// Sets the username.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the password.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the proxy address (an absolute URL).
    #[must_use]
    pub fn proxy_address(mut self, address: impl Into<String>) -> Self {
        self.proxy_address = Some(address.into());
        self
    }

    /// Sets the proxy port, overriding any port in the proxy address.
    #[must_use]
    pub const fn proxy_port(mut self, port: u16) -> Self {
        self.proxy_port = Some(port);
        self
    }

    /// Sets the proxy username.
    #[must_use]
    pub fn proxy_username(mut self, username: impl Into<String>) -> Self {
        self.proxy_username = Some(username.into());
        self
    }

    /// Sets the proxy password.
    #[must_use]
    pub fn proxy_password(mut self, password: impl Into<String>) -> Self {
        self.proxy_password = Some(password.into());
        self
    }

    /// Sets whether a scheme-less site falls back to HTTPS.
    #[must_use]
    pub const fn use_ssl(mut self, use_ssl: bool) -> Self {
        self.use_ssl = Some(use_ssl);
        self
    }

    /// Sets the TLS peer-verification mode.
    #[must_use]
    pub const fn ssl_verify_mode(mut self, mode: SslVerifyMode) -> Self {
        self.ssl_verify_mode = Some(mode);
        self
    }

    /// Pins the minimum TLS version.
    #[must_use]
    pub const fn ssl_version(mut self, version: SslVersion) -> Self {
        self.ssl_version = Some(version);
        self
    }

    /// Sets whether the transport keeps a cookie store.
    #[must_use]
    pub const fn use_cookies(mut self, use_cookies: bool) -> Self {
        self.use_cookies = Some(use_cookies);
        self
    }

    /// Adds one cookie (a `name=value` pair) sent with every request.
    #[must_use]
    pub fn additional_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.additional_cookies.push(cookie.into());
        self
    }

    /// Adds one header merged into every request.
    ///
    /// This is where bearer credentials belong:
    /// `.default_header("Authorization", "Bearer <token>")`.
    #[must_use]
    pub fn default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Sets the API token by writing the `Authorization` default header.
    ///
    /// Shorthand for `.default_header("Authorization", "Bearer <token>")`.
    #[must_use]
    pub fn bearer_token(self, token: impl AsRef<str>) -> Self {
        let token = token.as_ref();
        self.default_header("Authorization", format!("Bearer {token}"))
    }

    /// Replaces the whole default-header map.
    #[must_use]
    pub fn default_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.default_headers = headers;
        self
    }

    /// Sets the read timeout.
    #[must_use]
    pub const fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Enables request logging (method, path, and body at debug level).
    #[must_use]
    pub const fn http_debug(mut self, debug: bool) -> Self {
        self.http_debug = Some(debug);
        self
    }

    /// Sets the shared secret.
    #[must_use]
    pub fn shared_secret(mut self, secret: impl Into<String>) -> Self {
        self.shared_secret = Some(secret.into());
        self
    }

    /// Builds the [`ClientConfig`], validating site and proxy URLs and
    /// computing the effective REST base path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSite`] if the site is not an absolute
    /// URL (after scheme completion), or [`ConfigError::InvalidProxyAddress`]
    /// if a proxy address is set but unparseable or not an `http(s)` URL.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let use_ssl = self.use_ssl.unwrap_or(true);
        let site = normalize_site(
            self.site.as_deref().unwrap_or(DEFAULT_SITE),
            use_ssl,
        )?;

        if let Some(address) = &self.proxy_address {
            let parsed = Url::parse(address).map_err(|_| ConfigError::InvalidProxyAddress {
                address: address.clone(),
            })?;
            // The transport can only drive http(s) proxies; anything else
            // must fail here rather than fall back to a direct connection.
            if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
                return Err(ConfigError::InvalidProxyAddress {
                    address: address.clone(),
                });
            }
        }

        let context_path = self.context_path.unwrap_or_default();
        let rest_base_path = format!("{}{}", context_path, self.rest_base_path.unwrap_or_default());

        Ok(ClientConfig {
            site,
            context_path,
            rest_base_path,
            auth_type: self.auth_type.unwrap_or_default(),
            username: self.username,
            password: self.password,
            proxy_address: self.proxy_address,
            proxy_port: self.proxy_port,
            proxy_username: self.proxy_username,
            proxy_password: self.proxy_password,
            use_ssl,
            ssl_verify_mode: self.ssl_verify_mode.unwrap_or_default(),
            ssl_version: self.ssl_version,
            use_cookies: self.use_cookies.unwrap_or(false),
            additional_cookies: self.additional_cookies,
            default_headers: self.default_headers,
            read_timeout: self.read_timeout,
            http_debug: self.http_debug.unwrap_or(false),
            shared_secret: self.shared_secret,
        })
    }
}

/// Validates a site value and normalizes it to `scheme://host[:port][path]`
/// without a trailing slash.
fn normalize_site(raw: &str, use_ssl: bool) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidSite {
        site: raw.to_string(),
    };

    let completed = match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => raw.to_string(),
        // "localhost:9999" parses as scheme "localhost", so anything that is
        // not plainly http(s) gets the scheme-completion treatment.
        _ => {
            let scheme = if use_ssl { "https" } else { "http" };
            format!("{scheme}://{raw}")
        }
    };

    let parsed = Url::parse(&completed).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
        return Err(invalid());
    }

    Ok(completed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_productboard_defaults() {
        let config = ClientConfig::builder().build().unwrap();

        assert_eq!(config.site(), DEFAULT_SITE);
        assert_eq!(config.context_path(), "");
        assert_eq!(config.rest_base_path(), "");
        assert_eq!(config.auth_type(), AuthType::Basic);
        assert_eq!(config.ssl_verify_mode(), SslVerifyMode::Peer);
        assert!(config.use_ssl());
        assert!(!config.use_cookies());
        assert!(!config.http_debug());
        assert!(config.default_headers().is_empty());
        assert!(config.read_timeout().is_none());
    }

    #[test]
    fn test_rest_base_path_is_computed_once_from_context_path() {
        let config = ClientConfig::builder()
            .context_path("/internal")
            .rest_base_path("/rest/api/2")
            .build()
            .unwrap();

        assert_eq!(config.context_path(), "/internal");
        assert_eq!(config.rest_base_path(), "/internal/rest/api/2");
    }

    #[test]
    fn test_site_trailing_slash_is_stripped() {
        let config = ClientConfig::builder()
            .site("https://api.productboard.com/")
            .build()
            .unwrap();

        assert_eq!(config.site(), "https://api.productboard.com");
    }

    #[test]
    fn test_scheme_less_site_uses_ssl_flag() {
        let secure = ClientConfig::builder()
            .site("localhost:2990")
            .build()
            .unwrap();
        assert_eq!(secure.site(), "https://localhost:2990");

        let plain = ClientConfig::builder()
            .site("localhost:2990")
            .use_ssl(false)
            .build()
            .unwrap();
        assert_eq!(plain.site(), "http://localhost:2990");
    }

    #[test]
    fn test_invalid_site_is_rejected() {
        let result = ClientConfig::builder().site("not a url").build();
        assert!(matches!(result, Err(ConfigError::InvalidSite { .. })));
    }

    #[test]
    fn test_invalid_proxy_address_is_rejected() {
        let result = ClientConfig::builder().proxy_address("not a url").build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidProxyAddress { .. })
        ));
    }

    #[test]
    fn test_non_http_proxy_scheme_is_rejected() {
        // Parses as a URL, but the transport cannot drive it; building must
        // fail instead of letting requests bypass the proxy.
        let result = ClientConfig::builder()
            .proxy_address("socks5://127.0.0.1:1080")
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidProxyAddress { .. })
        ));
    }

    #[test]
    fn test_valid_proxy_address_is_accepted() {
        let config = ClientConfig::builder()
            .proxy_address("http://proxy.internal:8080")
            .proxy_port(3128)
            .build()
            .unwrap();

        assert_eq!(config.proxy_address(), Some("http://proxy.internal:8080"));
        assert_eq!(config.proxy_port(), Some(3128));
    }

    #[test]
    fn test_auth_type_parses_basic_only() {
        assert_eq!("basic".parse::<AuthType>().unwrap(), AuthType::Basic);
        assert_eq!("Basic".parse::<AuthType>().unwrap(), AuthType::Basic);

        let result = "oauth".parse::<AuthType>();
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedAuthType { auth_type }) if auth_type == "oauth"
        ));
    }

    #[test]
    fn test_default_headers_accumulate() {
        let config = ClientConfig::builder()
            .default_header("Authorization", "Bearer token")
            .default_header("X-Version", "1")
            .build()
            .unwrap();

        assert_eq!(config.default_headers().len(), 2);
        assert_eq!(
            config.default_headers().get("X-Version"),
            Some(&"1".to_string())
        );
    }

    #[test]
    fn test_bearer_token_writes_authorization_header() {
        let config = ClientConfig::builder()
            .bearer_token("my-api-token")
            .build()
            .unwrap();

        assert_eq!(
            config.default_headers().get("Authorization"),
            Some(&"Bearer my-api-token".to_string())
        );
    }

    #[test]
    fn test_debug_masks_secrets() {
        let config = ClientConfig::builder()
            .username("user@example.com")
            .password("hunter2")
            .proxy_password("proxypass")
            .shared_secret("sekrit")
            .default_header("Authorization", "Bearer token")
            .default_header("X-Version", "1")
            .build()
            .unwrap();

        let output = format!("{config:?}");
        assert!(output.contains("user@example.com"));
        assert!(output.contains("X-Version"));
        assert!(!output.contains("hunter2"));
        assert!(!output.contains("proxypass"));
        assert!(!output.contains("sekrit"));
        assert!(!output.contains("Bearer token"));
        assert!(output.contains("*****"));
    }

    #[test]
    fn test_config_is_clone_and_default() {
        let config = ClientConfig::default();
        let cloned = config.clone();
        assert_eq!(cloned.site(), config.site());
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientConfig>();
    }
}
