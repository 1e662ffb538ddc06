use std::path::PathBuf;

// =============================================================================
// Registry defaults
// =============================================================================

/// Default base URL for GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Releases requested per repository
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Delay between starting each fetch request to avoid rate limiting (10ms)
pub const FETCH_STAGGER_DELAY_MS: u64 = 10;

/// Repositories fetched at the same time
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Delimited input file with `repository,min_version` records
    pub input: PathBuf,
    pub api_url: String,
    pub github_token: Option<String>,
    pub per_page: u32,
    pub concurrency: usize,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            api_url: DEFAULT_API_URL.to_string(),
            github_token: None,
            per_page: DEFAULT_PER_PAGE,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Concurrency clamped to at least one in-flight fetch
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_defaults() {
        let config = Config::new("repos.csv");

        assert_eq!(config.input, PathBuf::from("repos.csv"));
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.github_token, None);
        assert_eq!(config.per_page, 10);
        assert_eq!(config.effective_concurrency(), DEFAULT_CONCURRENCY);
    }

    #[test]
    fn effective_concurrency_never_drops_to_zero() {
        let config = Config {
            concurrency: 0,
            ..Config::new("repos.csv")
        };

        assert_eq!(config.effective_concurrency(), 1);
    }
}
