//! REST resource infrastructure for the ProductBoard API.
//!
//! This module provides the foundational infrastructure for REST resources:
//!
//! - **[`ResourceType`] trait**: constants describing an endpoint family plus
//!   default implementations for `all`/`find`/`find_by`/`build`
//! - **[`Resource<T>`]**: the generic instance holding the raw attribute map,
//!   with `fetch`/`save`/`delete` and relation accessors
//! - **[`ResourceFactory`]**: a client-bound proxy for ergonomic call sites
//! - **[`ResourceOptions`]**: construction options (attributes, parents,
//!   query parameters)
//! - **[`RelationDescriptor`]**: constant tables declaring `has_one` /
//!   `has_many` relations
//! - **Path building**: prefix and query-string helpers in [`path`]
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! # Overview
//!
//! Resources are attribute maps, not typed structs: a [`Resource<T>`] carries
//! the exact JSON object the API returned, and the marker type `T`
//! contributes endpoint knowledge. The shipped markers live in [`resources`];
//! downstream crates add their own by implementing [`ResourceType`].
//!
//! # Example
//!
//! ```rust,ignore
//! use productboard_api::Client;
//! use productboard_api::rest::resources::Feature;
//!
//! let client = Client::default();
//!
//! // List, then drill in.
//! let features = client.features().all(None).await?;
//! let mut feature = client.features().find("abc-123", None).await?;
//!
//! // Attributes are raw JSON values.
//! println!("name: {:?}", feature.attr("name"));
//!
//! // Save merges the submitted attributes and the server's response.
//! let mut changes = serde_json::Map::new();
//! changes.insert("name".to_string(), "Renamed".into());
//! feature.save(&client, changes).await?;
//! ```

pub mod path;
pub mod resources;

mod errors;
mod factory;
mod options;
mod relations;
mod resource;

// Public exports
pub use errors::ResourceError;
pub use factory::ResourceFactory;
pub use options::{ResourceOptions, SEARCH_QUERY_PARAMS, SINGLE_FETCH_QUERY_PARAMS};
pub use relations::RelationDescriptor;
pub use resource::{Resource, ResourceType};
