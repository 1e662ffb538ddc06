//! Registry test utilities

use std::collections::HashMap;
use std::io::Write;

use async_trait::async_trait;
use tempfile::NamedTempFile;

use latest_versions::version::error::RegistryError;
use latest_versions::version::registry::Registry;

/// Mock registry for testing
pub struct MockRegistry {
    versions: HashMap<String, Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            versions: HashMap::new(),
        }
    }

    pub fn with_versions(mut self, repository: &str, versions: Vec<&str>) -> Self {
        self.versions.insert(
            repository.to_string(),
            versions.into_iter().map(|v| v.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_all_versions(&self, repository: &str) -> Result<Vec<String>, RegistryError> {
        match self.versions.get(repository) {
            Some(versions) => Ok(versions.clone()),
            None => Err(RegistryError::NotFound(repository.to_string())),
        }
    }
}

/// Write an input file with the given lines
pub fn write_input(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}
