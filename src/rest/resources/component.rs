//! Component resource implementation.
//!
//! This module provides the [`Component`] marker for ProductBoard components,
//! the grouping level above features in the product hierarchy.

use crate::rest::resource::ResourceType;

/// A ProductBoard component.
///
/// # Example
///
/// ```rust,ignore
/// use productboard_api::Client;
///
/// let client = Client::default();
/// let components = client.components().all(None).await?;
/// for component in &components {
///     println!("{:?}", component.attr("name"));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component;

impl ResourceType for Component {
    const NAME: &'static str = "Component";
    const ENDPOINT: &'static str = "components";
    const COLLECTION_KEY: Option<&'static str> = Some("components");
}
