//! Error taxonomy for the indexer core
//!
//! The core never prints diagnostics. Every failure is returned as an
//! [`IndexerError`] and the binary decides how to report it.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using IndexerError
pub type Result<T> = std::result::Result<T, IndexerError>;

#[derive(Debug, Error)]
pub enum IndexerError {
    /// A file or directory could not be read, or the snapshot could not be written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file to compare against does not exist
    #[error("snapshot file not found: {path}")]
    SnapshotNotFound { path: PathBuf },

    /// The snapshot file exists but is not a path -> fingerprint mapping
    #[error("could not decode snapshot file {path}: {source}")]
    SnapshotFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Strict root resolution walked up to the filesystem root without a marker
    #[error("no project root found above {start}")]
    AnchorNotFound { start: PathBuf },

    /// An ignore pattern is not a valid regular expression
    #[error("invalid ignore pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The command report could not be written to its output
    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

impl IndexerError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        IndexerError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, IndexerError::SnapshotNotFound { .. })
    }
}

/// Attach a path to a bare `std::io::Error`
pub(crate) trait IoResultExt<T> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| IndexerError::io(path, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_names_the_path() {
        let err = IndexerError::io(
            "src/app.ts",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(err.to_string(), "I/O error on src/app.ts: denied");
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_distinguishable() {
        let err = IndexerError::SnapshotNotFound {
            path: PathBuf::from(".project-indexer.idx"),
        };

        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "snapshot file not found: .project-indexer.idx"
        );
    }
}
