//! Output formatting for selected versions

use std::io::{self, Write};

use crate::version::semver::Version;

/// Format one result line, e.g. `latest versions of owner/repo: [2.0.0 1.3.0]`
pub fn format_line(owner: &str, repo: &str, versions: &[Version]) -> String {
    let joined = versions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("latest versions of {}/{}: [{}]", owner, repo, joined)
}

/// Write one result line followed by a newline
pub fn write_line<W: Write>(
    out: &mut W,
    owner: &str,
    repo: &str,
    versions: &[Version],
) -> io::Result<()> {
    writeln!(out, "{}", format_line(owner, repo, versions))
}
