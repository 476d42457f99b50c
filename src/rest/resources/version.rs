//! Version resource implementation.
//!
//! This module provides the [`Version`] marker for ProductBoard product
//! versions. Versions are read and listed like any other resource; they
//! declare no relations of their own.

use crate::rest::resource::ResourceType;

/// A ProductBoard product version.
///
/// # Example
///
/// ```rust,ignore
/// use productboard_api::Client;
///
/// let client = Client::default();
/// let versions = client.versions().all(None).await?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version;

impl ResourceType for Version {
    const NAME: &'static str = "Version";
    const ENDPOINT: &'static str = "versions";
    const COLLECTION_KEY: Option<&'static str> = Some("versions");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Client;
    use crate::config::ClientConfig;

    #[test]
    fn test_version_constants() {
        assert_eq!(Version::NAME, "Version");
        assert_eq!(Version::ENDPOINT, "versions");
        assert_eq!(Version::KEY_ATTRIBUTE, "id");
        assert_eq!(Version::COLLECTION_KEY, Some("versions"));
    }

    #[test]
    fn test_version_paths() {
        let client = Client::new(ClientConfig::default());

        assert_eq!(Version::collection_path(&client), "/versions");
        assert_eq!(Version::singular_path(&client, "v-1"), "/versions/v-1");
    }
}
