//! # ProductBoard API Rust Client
//!
//! A Rust client for the ProductBoard REST API, providing validated
//! configuration, an async HTTP transport, and a generic attribute-map
//! resource layer with declarative relations.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - A top-level [`Client`] with raw verb methods and typed factories
//! - A generic [`Resource`] wrapper keeping attributes as ordered JSON maps
//! - Declarative relations through [`ResourceType`] constants: parent scoping
//!   (`BELONGS_TO`), nested singletons (`HAS_ONE`), and inline collections
//!   (`HAS_MANY`)
//! - Shipped resource markers for [`Feature`], [`Version`], and [`Component`]
//! - Async HTTP transport with proxy, cookie, and TLS options
//!
//! ## Quick Start
//!
//! ```rust
//! use productboard_api::{Client, ClientConfig};
//!
//! // Create configuration using the builder pattern
//! let config = ClientConfig::builder()
//!     .bearer_token("your-api-token")
//!     .rest_base_path("/v1")
//!     .build()
//!     .unwrap();
//!
//! let client = Client::new(config);
//! ```
//!
//! ## Typed Resource Access
//!
//! Each shipped resource has a factory on the client:
//!
//! ```rust,ignore
//! // List every feature
//! let features = client.features().all(None).await?;
//!
//! // Fetch one by key
//! let feature = client.features().find("42", None).await?;
//! println!("{:?}", feature.attr("name"));
//!
//! // Search with query parameters
//! use productboard_api::ResourceOptions;
//! let options = ResourceOptions::new().param("maxResults", "10");
//! let page = client.features().find_by(options).await?;
//! ```
//!
//! ## Relations
//!
//! Relations are declared as constants on the resource type and read
//! straight from the fetched attributes, no extra requests:
//!
//! ```rust,ignore
//! use productboard_api::Feature;
//!
//! let feature = client.features().find("42", None).await?;
//! if let Some(parent) = feature.has_one::<Feature>("parent")? {
//!     println!("sub-feature of {:?}", parent.attr("id"));
//! }
//! ```
//!
//! ## Creating and Updating
//!
//! A resource built locally POSTs on save; a fetched one PUTs:
//!
//! ```rust,ignore
//! use serde_json::Map;
//!
//! let mut draft = client.features().build(Map::new())?;
//! let mut attrs = Map::new();
//! attrs.insert("name".to_string(), "Dark mode".into());
//! draft.save(&client, attrs).await?;
//! ```
//!
//! ## Raw Requests
//!
//! Endpoints without a resource type are reachable through the verb
//! methods directly:
//!
//! ```rust,ignore
//! let response = client.get("/webhooks", None).await?;
//! let body: serde_json::Value = serde_json::from_str(&response.body)?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: URL-shaped options are checked at build time
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Schema-free**: Attributes stay as JSON maps; decode into your own
//!   types when and where you want them

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::Client;
pub use config::{
    AuthType, ClientConfig, ClientConfigBuilder, SslVerifyMode, SslVersion, DEFAULT_SITE,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError,
};

// Re-export resource-layer types
pub use rest::{
    RelationDescriptor, Resource, ResourceError, ResourceFactory, ResourceOptions, ResourceType,
};

// Re-export the shipped resource markers
pub use rest::resources::{Component, Feature, Version};
