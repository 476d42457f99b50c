//! Relation descriptors for REST resources.
//!
//! Resource types declare their `has_one` / `has_many` relations as constant
//! [`RelationDescriptor`] tables. A descriptor names the relation as callers
//! see it, the attribute the related data is stored under, and an optional
//! chain of attribute keys to dig through first.
//!
//! # Nesting
//!
//! Some APIs bury related data inside envelope attributes. A feature's parent
//! feature, for example, may live at `attrs["parent"]["feature"]` rather than
//! at a top-level key. That shape is described as:
//!
//! ```rust
//! use productboard_api::rest::RelationDescriptor;
//!
//! const PARENT: RelationDescriptor = RelationDescriptor::new("parent", "feature", &["parent"]);
//! assert_eq!(PARENT.name, "parent");
//! ```

use serde_json::{Map, Value};

/// Describes one `has_one` or `has_many` relation of a resource type.
///
/// Descriptors are plain data declared in constant tables, so resolving a
/// relation name never involves reflection or string manipulation at call
/// time.
///
/// # Example
///
/// ```rust
/// use productboard_api::rest::RelationDescriptor;
///
/// // Related data stored directly under the relation name.
/// const COMMENTS: RelationDescriptor = RelationDescriptor::flat("comments");
/// assert_eq!(COMMENTS.key, "comments");
///
/// // Related data stored under a different key, nested inside an envelope.
/// const PARENT: RelationDescriptor = RelationDescriptor::new("parent", "feature", &["parent"]);
/// assert_eq!(PARENT.nested_under, &["parent"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationDescriptor {
    /// The relation name callers pass to `has_one` / `has_many`.
    pub name: &'static str,
    /// The attribute key the related data is stored under.
    pub key: &'static str,
    /// Attribute keys to walk through before looking up `key`.
    pub nested_under: &'static [&'static str],
}

impl RelationDescriptor {
    /// Creates a descriptor with an explicit attribute key and nesting chain.
    #[must_use]
    pub const fn new(
        name: &'static str,
        key: &'static str,
        nested_under: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            key,
            nested_under,
        }
    }

    /// Creates a descriptor whose attribute key equals the relation name,
    /// with no nesting.
    #[must_use]
    pub const fn flat(name: &'static str) -> Self {
        Self::new(name, name, &[])
    }
}

/// Resolves a descriptor against an attribute map.
///
/// Walks the descriptor's `nested_under` chain starting from `attrs`, then
/// looks up `key` in whatever object the walk ended on. Returns `None` if any
/// step of the chain is absent or not an object.
#[must_use]
pub(crate) fn nested_attribute<'a>(
    attrs: &'a Map<String, Value>,
    descriptor: &RelationDescriptor,
) -> Option<&'a Value> {
    let mut scope: Option<&'a Value> = None;
    for segment in descriptor.nested_under {
        let next = match scope {
            None => attrs.get(*segment),
            Some(value) => value.get(segment),
        };
        match next {
            Some(value) => scope = Some(value),
            None => return None,
        }
    }

    match scope {
        None => attrs.get(descriptor.key),
        Some(value) => value.get(descriptor.key),
    }
}

// Verify RelationDescriptor is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RelationDescriptor>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_flat_descriptor_uses_name_as_key() {
        let descriptor = RelationDescriptor::flat("comments");

        assert_eq!(descriptor.name, "comments");
        assert_eq!(descriptor.key, "comments");
        assert!(descriptor.nested_under.is_empty());
    }

    #[test]
    fn test_nested_attribute_reads_top_level_key() {
        let attrs = attrs(json!({"comments": [{"id": 1}]}));
        let descriptor = RelationDescriptor::flat("comments");

        let value = nested_attribute(&attrs, &descriptor);
        assert_eq!(value, Some(&json!([{"id": 1}])));
    }

    #[test]
    fn test_nested_attribute_walks_the_nesting_chain() {
        let attrs = attrs(json!({
            "parent": {
                "feature": {"id": "abc", "name": "Parent feature"}
            }
        }));
        let descriptor = RelationDescriptor::new("parent", "feature", &["parent"]);

        let value = nested_attribute(&attrs, &descriptor);
        assert_eq!(value.and_then(|v| v.get("id")), Some(&json!("abc")));
    }

    #[test]
    fn test_nested_attribute_walks_multiple_levels() {
        let attrs = attrs(json!({
            "links": {
                "owner": {
                    "user": {"id": 7}
                }
            }
        }));
        let descriptor = RelationDescriptor::new("owner", "user", &["links", "owner"]);

        let value = nested_attribute(&attrs, &descriptor);
        assert_eq!(value, Some(&json!({"id": 7})));
    }

    #[test]
    fn test_nested_attribute_returns_none_when_chain_is_broken() {
        let attrs = attrs(json!({"parent": null}));
        let descriptor = RelationDescriptor::new("parent", "feature", &["parent"]);

        assert_eq!(nested_attribute(&attrs, &descriptor), None);
    }

    #[test]
    fn test_nested_attribute_returns_none_when_key_is_absent() {
        let attrs = attrs(json!({"name": "A feature"}));
        let descriptor = RelationDescriptor::flat("comments");

        assert_eq!(nested_attribute(&attrs, &descriptor), None);
    }
}
