//! Selection of the newest stable release per minor line

use crate::version::semver::Version;

/// Select the newest stable release of every `major.minor` line at or above
/// `min_version`, ordered from newest to oldest.
///
/// Pre-releases are never returned. Only the last selected entry is checked
/// for a repeated minor line, which is enough because the walk is over a
/// descending order where each line is contiguous.
pub fn select_latest_per_minor_line(releases: &[Version], min_version: &Version) -> Vec<Version> {
    let mut sorted = releases.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut selected: Vec<Version> = Vec::new();
    for release in sorted {
        if release < *min_version {
            break;
        }
        if release.is_pre_release() {
            continue;
        }
        if selected
            .last()
            .is_some_and(|last| last.same_minor_line(&release))
        {
            continue;
        }
        selected.push(release);
    }
    selected
}
