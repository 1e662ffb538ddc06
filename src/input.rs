//! Input file parser
//!
//! Reads the delimited list of repositories to check. The first line is a
//! header and is skipped; every following line is a record:
//!
//! ```text
//! repository,min_version
//! kubernetes/kubernetes,1.8.0
//! prometheus/prometheus,v2.2.0
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::version::error::VersionError;
use crate::version::semver::Version;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid repository '{value}', expected owner/repo")]
    InvalidRepository { line: usize, value: String },

    #[error("line {line}: {source}")]
    InvalidMinVersion {
        line: usize,
        #[source]
        source: VersionError,
    },
}

/// One repository to check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    pub owner: String,
    pub repo: String,
    pub min_version: Version,
    /// 1-based line number in the input file
    pub line: usize,
}

impl RepositoryRecord {
    /// Repository in `owner/repo` form
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Read and parse an input file.
///
/// Fails only when the file cannot be read; malformed lines are returned as
/// per-line errors so the caller can skip them.
pub fn read_records(path: &Path) -> Result<Vec<Result<RepositoryRecord, InputError>>, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_records(&content))
}

/// Parse the content of an input file, skipping the header and blank lines.
pub fn parse_records(content: &str) -> Vec<Result<RepositoryRecord, InputError>> {
    content
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(line, index + 1))
        .collect()
}

fn parse_line(line: &str, line_num: usize) -> Result<RepositoryRecord, InputError> {
    let mut fields = line.split(',').map(str::trim);

    let repository = fields
        .next()
        .filter(|f| !f.is_empty())
        .ok_or(InputError::MissingField {
            line: line_num,
            field: "repository",
        })?;
    let min_version = fields
        .next()
        .filter(|f| !f.is_empty())
        .ok_or(InputError::MissingField {
            line: line_num,
            field: "min_version",
        })?;

    let (owner, repo) = repository
        .split_once('/')
        .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty() && !repo.contains('/'))
        .ok_or_else(|| InputError::InvalidRepository {
            line: line_num,
            value: repository.to_string(),
        })?;

    let min_version =
        Version::parse(min_version).map_err(|source| InputError::InvalidMinVersion {
            line: line_num,
            source,
        })?;

    Ok(RepositoryRecord {
        owner: owner.to_string(),
        repo: repo.to_string(),
        min_version,
        line: line_num,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_records_skips_header_and_blank_lines() {
        let content = "repository,min_version\n\
                       kubernetes/kubernetes,1.8.0\n\
                       \n\
                       prometheus/prometheus , v2.2.0 \n";

        let records: Vec<_> = parse_records(content)
            .into_iter()
            .map(Result::unwrap)
            .collect();

        assert_eq!(
            records,
            vec![
                RepositoryRecord {
                    owner: "kubernetes".to_string(),
                    repo: "kubernetes".to_string(),
                    min_version: Version::new(1, 8, 0),
                    line: 2,
                },
                RepositoryRecord {
                    owner: "prometheus".to_string(),
                    repo: "prometheus".to_string(),
                    min_version: Version::new(2, 2, 0),
                    line: 4,
                },
            ]
        );
        assert_eq!(records[1].full_name(), "prometheus/prometheus");
    }

    #[test]
    fn parse_records_treats_first_line_as_header_even_if_it_looks_like_a_record() {
        let records = parse_records("golang/go,1.0.0\nrust-lang/rust,1.70\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_ref().unwrap().repo, "rust");
    }

    #[test]
    fn parse_records_ignores_extra_columns() {
        let records = parse_records("header\nowner/repo,1.0.0,ignored\n");

        assert_eq!(records[0].as_ref().unwrap().min_version, Version::new(1, 0, 0));
    }

    #[test]
    fn parse_records_returns_empty_for_header_only() {
        assert!(parse_records("repository,min_version\n").is_empty());
        assert!(parse_records("").is_empty());
    }

    #[rstest]
    #[case("owner/repo", "line 2: missing min_version")]
    #[case("owner/repo,", "line 2: missing min_version")]
    #[case(",1.0.0", "line 2: missing repository")]
    #[case("ownerrepo,1.0.0", "line 2: invalid repository 'ownerrepo', expected owner/repo")]
    #[case("/repo,1.0.0", "line 2: invalid repository '/repo', expected owner/repo")]
    #[case("a/b/c,1.0.0", "line 2: invalid repository 'a/b/c', expected owner/repo")]
    fn parse_records_reports_malformed_lines(#[case] line: &str, #[case] expected: &str) {
        let records = parse_records(&format!("header\n{line}\n"));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_ref().unwrap_err().to_string(), expected);
    }

    #[test]
    fn parse_records_reports_invalid_min_version() {
        let records = parse_records("header\nowner/repo,latest\n");

        assert!(matches!(
            records[0],
            Err(InputError::InvalidMinVersion { line: 2, .. })
        ));
    }

    #[test]
    fn parse_records_keeps_valid_lines_after_invalid_ones() {
        let records = parse_records("header\nbroken\nowner/repo,1.0.0\n");

        assert!(records[0].is_err());
        assert_eq!(records[1].as_ref().unwrap().line, 3);
    }

    #[test]
    fn read_records_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "repository,min_version").unwrap();
        writeln!(file, "owner/repo,0.1.0").unwrap();

        let records = read_records(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_ref().unwrap().full_name(), "owner/repo");
    }

    #[test]
    fn read_records_fails_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_records(&dir.path().join("missing.csv"));

        assert!(matches!(result, Err(InputError::Io { .. })));
    }
}
