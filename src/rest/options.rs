//! Construction and query options for REST resources.
//!
//! [`ResourceOptions`] is the single options bag accepted by resource
//! constructors and class-level operations. It carries initial attributes,
//! the expanded flag, parent keys for nested resources, and query parameters
//! for fetch and search calls.
//!
//! Query parameters are filtered against per-operation allow-lists before a
//! request is built, so callers can pass one options value around without
//! leaking search-only parameters into single-resource fetches.
//!
//! # Example
//!
//! ```rust
//! use productboard_api::rest::ResourceOptions;
//! use serde_json::json;
//!
//! let options = ResourceOptions::new()
//!     .attr("name", json!("Dark mode"))
//!     .expanded(false)
//!     .param("expand", "children")
//!     .param("maxResults", "50");
//! ```

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::rest::resource::{Resource, ResourceType};

/// Query parameters accepted when fetching a single resource.
pub const SINGLE_FETCH_QUERY_PARAMS: &[&str] = &["expand", "fields"];

/// Query parameters accepted when searching a collection.
pub const SEARCH_QUERY_PARAMS: &[&str] = &["expand", "fields", "startAt", "maxResults"];

/// Options accepted by resource constructors and class-level operations.
///
/// All setters consume and return `self`, so options are built fluently and
/// passed by value. The default value carries no attributes, no parents, no
/// query parameters, and `expanded = false`.
#[derive(Debug, Clone, Default)]
pub struct ResourceOptions {
    pub(crate) attrs: Map<String, Value>,
    pub(crate) expanded: bool,
    pub(crate) parents: HashMap<String, String>,
    pub(crate) params: HashMap<String, String>,
}

impl ResourceOptions {
    /// Creates an empty options value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the initial attribute map.
    #[must_use]
    pub fn attrs(mut self, attrs: Map<String, Value>) -> Self {
        self.attrs = attrs;
        self
    }

    /// Sets a single initial attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Marks the constructed resource as already expanded (or not).
    ///
    /// An expanded resource will not re-fetch itself unless a reload is
    /// requested.
    #[must_use]
    pub const fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Binds a parent resource for a `belongs_to` relation.
    ///
    /// Only parents with a key value can be bound; a parent that has no key
    /// yet is skipped, and construction of the child will fail with
    /// `MissingRelation` for that relation.
    #[must_use]
    pub fn parent<P: ResourceType>(self, relation: impl Into<String>, parent: &Resource<P>) -> Self {
        match parent.key_value() {
            Some(key) => self.parent_key(relation, key),
            None => self,
        }
    }

    /// Binds a parent key directly for a `belongs_to` relation.
    #[must_use]
    pub fn parent_key(mut self, relation: impl Into<String>, key: impl Into<String>) -> Self {
        self.parents.insert(relation.into(), key.into());
        self
    }

    /// Sets a query parameter.
    ///
    /// Parameters are filtered against the operation's allow-list when a
    /// request is built; unknown parameters are silently dropped.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Returns the query parameters allowed on a single-resource fetch.
    pub(crate) fn single_fetch_params(&self) -> HashMap<String, String> {
        self.filtered_params(SINGLE_FETCH_QUERY_PARAMS)
    }

    /// Returns the query parameters allowed on a collection search.
    pub(crate) fn search_params(&self) -> HashMap<String, String> {
        self.filtered_params(SEARCH_QUERY_PARAMS)
    }

    fn filtered_params(&self, allowed: &[&str]) -> HashMap<String, String> {
        self.params
            .iter()
            .filter(|(name, _)| allowed.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

// Verify ResourceOptions is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOptions>();
};
