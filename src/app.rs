//! Per-repository pipeline: fetch releases, parse tags, select, report

use std::io::Write;
use std::pin::pin;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::config::{Config, FETCH_STAGGER_DELAY_MS};
use crate::input::{self, RepositoryRecord};
use crate::report;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::selector::select_latest_per_minor_line;
use crate::version::semver::Version;

/// Counts of processed input records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Records with a printed result line
    pub printed: usize,
    /// Records skipped because of an input or registry error
    pub skipped: usize,
}

/// Parse release tags, dropping the ones that are not versions.
pub fn parse_tags(tags: &[String]) -> Vec<Version> {
    tags.iter()
        .filter_map(|tag| {
            Version::parse(tag)
                .inspect_err(|e| debug!("Ignoring release tag: {}", e))
                .ok()
        })
        .collect()
}

/// Fetch a repository's releases and select the newest stable release of
/// each minor line at or above the record's minimum version.
pub async fn latest_versions_for(
    registry: &dyn Registry,
    record: &RepositoryRecord,
) -> Result<Vec<Version>, RegistryError> {
    let repository = record.full_name();
    let tags = registry.fetch_all_versions(&repository).await?;
    let releases = parse_tags(&tags);
    debug!(
        "{}: {} of {} tags are versions",
        repository,
        releases.len(),
        tags.len()
    );

    Ok(select_latest_per_minor_line(&releases, &record.min_version))
}

/// Process every record of the input file and write one line per repository.
///
/// Fetches run concurrently with staggered start times; output keeps the
/// input order. Malformed records and failed fetches are logged and skipped.
/// Fails only if the input file cannot be read or the output cannot be written.
pub async fn run<W: Write>(
    config: &Config,
    registry: &dyn Registry,
    out: &mut W,
) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    let mut records = Vec::new();
    for record in input::read_records(&config.input)? {
        match record {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Skipping input record: {}", e);
                summary.skipped += 1;
            }
        }
    }
    info!("Checking {} repositories", records.len());

    let concurrency = config.effective_concurrency();
    let results = stream::iter(records.into_iter().enumerate())
        .map(|(i, record)| async move {
            let delay = Duration::from_millis(FETCH_STAGGER_DELAY_MS * (i % concurrency) as u64);
            sleep(delay).await;
            let result = latest_versions_for(registry, &record).await;
            (record, result)
        })
        .buffered(concurrency);
    let mut results = pin!(results);

    while let Some((record, result)) = results.next().await {
        match result {
            Ok(versions) => {
                report::write_line(out, &record.owner, &record.repo, &versions)?;
                summary.printed += 1;
            }
            Err(e) => {
                error!(
                    "Failed to list releases for {} (line {}): {}",
                    record.full_name(),
                    record.line,
                    e
                );
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
