//! Registry trait for listing the releases of a repository

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for fetching release tags from a remote source
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the release tags of a repository
    ///
    /// # Arguments
    /// * `repository` - The repository in `owner/repo` form (e.g., "actions/checkout")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Raw tag names in the order the source returned them
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_all_versions(&self, repository: &str) -> Result<Vec<String>, RegistryError>;
}
