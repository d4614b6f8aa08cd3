use crate::artifacts::filter::{ALLOWED_EXTENSIONS, TEST_FILE_EXTENSIONS, VCS_DIRECTORIES};
use crate::artifacts::snapshot::SNAPSHOT_EXTENSION;
use crate::errors::{IndexerError, Result};
use regex::Regex;
use std::collections::BTreeSet;

/// A single admission rule over a project-relative, `/`-separated path
#[derive(Debug, Clone)]
pub enum FilterRule {
    /// Reject the snapshot file itself and anything carrying the snapshot extension
    RejectSnapshotFile { name: String, extension: String },
    /// Reject a path if any of its segments is in the set
    RejectSegments(BTreeSet<String>),
    /// Reject a path matching the pattern
    RejectPattern(Regex),
    /// Reject a path not matching the pattern
    RequirePattern(Regex),
}

impl FilterRule {
    pub fn snapshot_file(name: &str) -> Self {
        FilterRule::RejectSnapshotFile {
            name: name.to_string(),
            extension: SNAPSHOT_EXTENSION.to_string(),
        }
    }

    pub fn vcs_directories() -> Self {
        FilterRule::RejectSegments(VCS_DIRECTORIES.iter().map(|s| s.to_string()).collect())
    }

    pub fn test_files() -> Self {
        FilterRule::RejectPattern(Self::extension_regex(r"\.test\.", &TEST_FILE_EXTENSIONS))
    }

    pub fn allowed_extensions() -> Self {
        FilterRule::RequirePattern(Self::extension_regex(r".+\.", &ALLOWED_EXTENSIONS))
    }

    pub fn ignore_pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(FilterRule::RejectPattern)
            .map_err(|source| IndexerError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn rejects(&self, path: &str) -> bool {
        match self {
            FilterRule::RejectSnapshotFile { name, extension } => {
                let file_name = path.rsplit('/').next().unwrap_or(path);
                path == name || file_name == name || path.ends_with(extension.as_str())
            }
            FilterRule::RejectSegments(segments) => {
                path.split('/').any(|segment| segments.contains(segment))
            }
            FilterRule::RejectPattern(pattern) => pattern.is_match(path),
            FilterRule::RequirePattern(pattern) => !pattern.is_match(path),
        }
    }

    /// Whether a directory with this name can be skipped without descending
    ///
    /// Only segment rules can decide this from a single directory name.
    pub fn prunes_directory(&self, dir_name: &str) -> bool {
        match self {
            FilterRule::RejectSegments(segments) => segments.contains(dir_name),
            _ => false,
        }
    }

    fn extension_regex(prefix: &str, extensions: &[&str]) -> Regex {
        let alternatives = extensions
            .iter()
            .map(|ext| regex::escape(ext))
            .collect::<Vec<_>>()
            .join("|");

        // built from fixed, escaped alternatives
        Regex::new(&format!("{prefix}({alternatives})$")).expect("extension pattern is valid")
    }
}
