//! Feature resource implementation.
//!
//! This module provides the [`Feature`] marker for ProductBoard features, the
//! central entity of the product hierarchy.
//!
//! # Collection Shape
//!
//! The features endpoint wraps its elements in a `features` envelope:
//!
//! ```json
//! {"features": [{"id": "...", "name": "..."}, ...]}
//! ```
//!
//! # Parent Feature
//!
//! A sub-feature's response nests its parent under `parent.feature`. The
//! declared `parent` relation digs through that envelope:
//!
//! ```rust,ignore
//! let feature = client.features().find("abc-123", None).await?;
//! if let Some(parent) = feature.has_one::<Feature>("parent")? {
//!     println!("parent: {:?}", parent.attr("id"));
//! }
//! ```

use crate::rest::relations::RelationDescriptor;
use crate::rest::resource::ResourceType;

/// A ProductBoard feature.
///
/// Instances are [`Resource<Feature>`](crate::rest::Resource) values; this
/// marker contributes the endpoint constants and relation table.
///
/// # Example
///
/// ```rust,ignore
/// use productboard_api::Client;
///
/// let client = Client::default();
/// let features = client.features().all(None).await?;
/// for feature in &features {
///     println!("{:?}", feature.attr("name"));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature;

impl ResourceType for Feature {
    const NAME: &'static str = "Feature";
    const ENDPOINT: &'static str = "features";
    const COLLECTION_KEY: Option<&'static str> = Some("features");

    /// Sub-features carry their parent under `parent.feature`.
    const HAS_ONE: &'static [RelationDescriptor] =
        &[RelationDescriptor::new("parent", "feature", &["parent"])];
}

// Verify resource instances are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<crate::rest::Resource<Feature>>();
};
