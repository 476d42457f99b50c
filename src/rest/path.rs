//! Path building helpers for REST resources.
//!
//! This module provides the small set of string operations that resource
//! types compose into request paths: collection and singular paths rooted at
//! the client's REST base path, nesting prefixes derived from parent
//! relations, query-string encoding, and self-link normalization.
//!
//! # Path Shapes
//!
//! A resource with endpoint `features` and REST base path `/v1` resolves to:
//! - `/v1/features` (collection)
//! - `/v1/features/{key}` (singular)
//!
//! A resource nested under a parent uses a prefix built from the parent
//! relation name and key, e.g. `/feature/123/`:
//! - `/v1/feature/123/comments` (nested collection)
//!
//! # Example
//!
//! ```rust
//! use productboard_api::rest::path::{belongs_to_prefix, collection_path, singular_path};
//!
//! let prefix = belongs_to_prefix([("feature", "123")]);
//! assert_eq!(prefix, "/feature/123/");
//!
//! let collection = collection_path("/v1", &prefix, "comments");
//! assert_eq!(collection, "/v1/feature/123/comments");
//!
//! let singular = singular_path("/v1", "/", "features", "123");
//! assert_eq!(singular, "/v1/features/123");
//! ```

use std::collections::HashMap;

/// Builds the collection path for an endpoint.
///
/// The path is composed as `{rest_base_path}{prefix}{endpoint}`. The prefix
/// is `/` for top-level resources, or a nesting prefix produced by
/// [`belongs_to_prefix`] for resources that live under a parent.
///
/// # Example
///
/// ```rust
/// use productboard_api::rest::path::collection_path;
///
/// assert_eq!(collection_path("", "/", "features"), "/features");
/// assert_eq!(collection_path("/v1", "/", "features"), "/v1/features");
/// ```
#[must_use]
pub fn collection_path(rest_base_path: &str, prefix: &str, endpoint: &str) -> String {
    format!("{rest_base_path}{prefix}{endpoint}")
}

/// Builds the singular path for one resource identified by `key`.
///
/// The path is the collection path with `/{key}` appended.
///
/// # Example
///
/// ```rust
/// use productboard_api::rest::path::singular_path;
///
/// assert_eq!(singular_path("/v1", "/", "features", "abc"), "/v1/features/abc");
/// ```
#[must_use]
pub fn singular_path(rest_base_path: &str, prefix: &str, endpoint: &str, key: &str) -> String {
    format!("{}/{key}", collection_path(rest_base_path, prefix, endpoint))
}

/// Builds the nesting prefix for a chain of parent relations.
///
/// Each `(relation, key)` pair contributes a `/{relation}/{key}` segment, and
/// the prefix always ends with `/` so an endpoint can be glued on directly.
/// With no parents the prefix is just `/`.
///
/// # Example
///
/// ```rust
/// use productboard_api::rest::path::belongs_to_prefix;
///
/// assert_eq!(belongs_to_prefix(std::iter::empty::<(&str, &str)>()), "/");
/// assert_eq!(belongs_to_prefix([("feature", "1")]), "/feature/1/");
/// assert_eq!(
///     belongs_to_prefix([("product", "1"), ("feature", "2")]),
///     "/product/1/feature/2/",
/// );
/// ```
#[must_use]
pub fn belongs_to_prefix<'a, I>(parents: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut prefix = String::from("/");
    for (relation, key) in parents {
        prefix.push_str(relation);
        prefix.push('/');
        prefix.push_str(key);
        prefix.push('/');
    }
    prefix
}

/// Ensures the given URL is server-absolute.
///
/// Paths already starting with `/`, and fully-qualified `http(s)` URLs, are
/// returned unchanged; anything else gets a leading `/` prepended. Used when
/// a stored self link or caller-supplied path may be missing its slash.
///
/// # Example
///
/// ```rust
/// use productboard_api::rest::path::ensure_leading_slash;
///
/// assert_eq!(ensure_leading_slash("features/1"), "/features/1");
/// assert_eq!(ensure_leading_slash("/features/1"), "/features/1");
/// assert_eq!(
///     ensure_leading_slash("https://api.example.com/features/1"),
///     "https://api.example.com/features/1",
/// );
/// ```
#[must_use]
pub fn ensure_leading_slash(url: &str) -> String {
    if url.starts_with('/') || url.starts_with("http") {
        url.to_string()
    } else {
        format!("/{url}")
    }
}

/// Appends percent-encoded query parameters to a path.
///
/// Keys are sorted before encoding so the output is deterministic. An empty
/// parameter map returns the path unchanged. The function appends with `?`
/// unconditionally, so the incoming path must not already carry a query
/// string.
///
/// # Example
///
/// ```rust
/// use productboard_api::rest::path::append_query;
/// use std::collections::HashMap;
///
/// let mut params = HashMap::new();
/// params.insert("expand".to_string(), "children".to_string());
/// params.insert("fields".to_string(), "name,status".to_string());
///
/// let url = append_query("/v1/features", &params);
/// assert_eq!(url, "/v1/features?expand=children&fields=name%2Cstatus");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn append_query(path: &str, params: &HashMap<String, String>) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let mut pairs: Vec<(&String, &String)> = params.iter().collect();
    pairs.sort_unstable_by_key(|&(key, _)| key);

    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{path}?{query}")
}

/// Strips the configured site prefix from a fully-qualified URL.
///
/// Self links returned by the API are absolute; requests only need the
/// server-absolute portion. URLs that don't start with `site` are returned
/// unchanged.
///
/// # Example
///
/// ```rust
/// use productboard_api::rest::path::strip_site;
///
/// let url = "https://api.productboard.com/features/1";
/// assert_eq!(strip_site(url, "https://api.productboard.com"), "/features/1");
/// assert_eq!(strip_site("/features/1", "https://api.productboard.com"), "/features/1");
/// ```
#[must_use]
pub fn strip_site<'a>(url: &'a str, site: &str) -> &'a str {
    if site.is_empty() {
        return url;
    }
    url.strip_prefix(site).unwrap_or(url)
}
