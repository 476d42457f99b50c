//! Per-type resource factories bound to a client.
//!
//! A [`ResourceFactory`] pairs one client with one resource type so call
//! sites read `client.features().find("abc")` instead of threading the
//! client through every class-level call. Every method forwards verbatim to
//! the corresponding [`ResourceType`](crate::rest::ResourceType) operation;
//! the factory holds no state beyond the client reference.

use std::fmt;
use std::marker::PhantomData;

use serde_json::{Map, Value};

use crate::client::Client;
use crate::rest::errors::ResourceError;
use crate::rest::options::ResourceOptions;
use crate::rest::resource::{Resource, ResourceType};

/// A stateless proxy binding one client to one resource type.
///
/// Obtained from [`Client::factory`](crate::client::Client::factory) or the
/// named convenience methods on the client.
///
/// # Example
///
/// ```rust,ignore
/// use productboard_api::Client;
///
/// let client = Client::default();
/// let features = client.features().all(None).await?;
/// let one = client.features().find("abc-123", None).await?;
/// ```
pub struct ResourceFactory<'a, T: ResourceType> {
    client: &'a Client,
    _marker: PhantomData<T>,
}

impl<'a, T: ResourceType> ResourceFactory<'a, T> {
    /// Binds `client` to the target resource type.
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self {
            client,
            _marker: PhantomData,
        }
    }

    /// Lists all resources of the bound type.
    ///
    /// # Errors
    ///
    /// See [`ResourceType::all`].
    pub async fn all(
        &self,
        options: Option<ResourceOptions>,
    ) -> Result<Vec<Resource<T>>, ResourceError> {
        T::all(self.client, options).await
    }

    /// Finds a single resource by key.
    ///
    /// # Errors
    ///
    /// See [`ResourceType::find`].
    pub async fn find(
        &self,
        key: &str,
        options: Option<ResourceOptions>,
    ) -> Result<Resource<T>, ResourceError> {
        T::find(self.client, key, options).await
    }

    /// Searches the collection with query parameters.
    ///
    /// # Errors
    ///
    /// See [`ResourceType::find_by`].
    pub async fn find_by(&self, options: ResourceOptions) -> Result<Vec<Resource<T>>, ResourceError> {
        T::find_by(self.client, options).await
    }

    /// Builds a new, never-persisted instance.
    ///
    /// # Errors
    ///
    /// See [`ResourceType::build`].
    pub fn build(&self, attrs: Map<String, Value>) -> Result<Resource<T>, ResourceError> {
        T::build(attrs)
    }

    /// Returns the bound type's collection path.
    #[must_use]
    pub fn collection_path(&self) -> String {
        T::collection_path(self.client)
    }

    /// Returns the bound type's singular path for `key`.
    #[must_use]
    pub fn singular_path(&self, key: &str) -> String {
        T::singular_path(self.client, key)
    }
}

// Manual impls: the factory is always copyable regardless of the marker.
impl<T: ResourceType> Clone for ResourceFactory<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ResourceType> Copy for ResourceFactory<'_, T> {}

impl<T: ResourceType> fmt::Debug for ResourceFactory<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceFactory")
            .field("resource", &T::NAME)
            .finish_non_exhaustive()
    }
}
