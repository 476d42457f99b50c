//! Shipped REST resource types.
//!
//! This module contains the resource markers the crate ships out of the box:
//! [`Feature`], [`Version`], and [`Component`]. Each marker implements
//! [`ResourceType`](crate::rest::ResourceType) by declaring its endpoint
//! constants and relation tables; all behavior comes from the trait's
//! default implementations.
//!
//! Downstream crates can define markers for additional endpoints the same
//! way; nothing here is special-cased.
//!
//! # Example
//!
//! ```rust,ignore
//! use productboard_api::Client;
//! use productboard_api::rest::resources::Feature;
//!
//! let client = Client::default();
//!
//! // Through the factory...
//! let features = client.features().all(None).await?;
//!
//! // ...or through the type directly.
//! let one = Feature::find(&client, "abc-123", None).await?;
//! ```

mod component;
mod feature;
mod version;

pub use component::Component;
pub use feature::Feature;
pub use version::Version;
