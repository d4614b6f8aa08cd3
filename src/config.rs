//! Indexer configuration
//!
//! Everything a scan depends on is gathered here and turned into the
//! constructed collaborators (path filter, root locator, snapshot store).
//! Nothing is read from global state.

use crate::areas::root_locator::{MarkerRootLocator, RootLocator, StrictRootLocator};
use crate::areas::snapshot_store::SnapshotStore;
use crate::artifacts::filter::path_filter::PathFilter;
use crate::artifacts::snapshot::DEFAULT_SNAPSHOT_NAME;
use crate::errors::Result;
use std::path::PathBuf;

/// How the project root is resolved when no marker directory is found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootMode {
    /// Use the parent of the scanned directory
    #[default]
    Fallback,
    /// Fail the scan
    Strict,
}

#[derive(Debug, Clone)]
pub struct IndexerConfig {
    /// Snapshot file, or the directory holding the default snapshot file
    pub snapshot_location: PathBuf,
    /// Extra regular expressions rejecting relative paths
    pub ignore_patterns: Vec<String>,
    pub root_mode: RootMode,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            snapshot_location: PathBuf::from(DEFAULT_SNAPSHOT_NAME),
            ignore_patterns: Vec::new(),
            root_mode: RootMode::default(),
        }
    }
}

impl IndexerConfig {
    pub fn snapshot_store(&self) -> SnapshotStore {
        SnapshotStore::at(&self.snapshot_location)
    }

    /// Standard rules guarding the configured snapshot, plus ignore patterns
    pub fn path_filter(&self) -> Result<PathFilter> {
        PathFilter::with_ignore_patterns(&self.snapshot_store().file_name(), &self.ignore_patterns)
    }

    pub fn root_locator(&self) -> Box<dyn RootLocator> {
        match self.root_mode {
            RootMode::Fallback => Box::new(MarkerRootLocator::default()),
            RootMode::Strict => Box::new(StrictRootLocator::default()),
        }
    }
}
