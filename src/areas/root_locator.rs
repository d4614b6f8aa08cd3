//! Project root resolution
//!
//! Snapshot keys are relative to the project root (the *anchor*) rather than
//! to the scanned directory, so a scan of `web/src` and a scan of the whole
//! project produce comparable keys.

use crate::errors::{IndexerError, Result};
use derive_new::new;
use std::path::{Path, PathBuf};

/// Subdirectories whose presence marks a project root
pub const PROJECT_MARKERS: [&str; 2] = [".git", "node_modules"];

pub trait RootLocator: std::fmt::Debug {
    /// Resolve the anchor for a scan starting at `start`
    fn locate(&self, start: &Path) -> Result<PathBuf>;
}

/// Names of the marker entries a locator searches for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMarkers(Vec<String>);

impl Default for ProjectMarkers {
    fn default() -> Self {
        Self::new(&PROJECT_MARKERS)
    }
}

impl ProjectMarkers {
    pub fn new(names: &[&str]) -> Self {
        Self(names.iter().map(|name| name.to_string()).collect())
    }

    /// Find the nearest ancestor of `start` (inclusive) holding a marker
    pub fn find_marked_ancestor(&self, start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| self.0.iter().any(|marker| dir.join(marker).exists()))
            .map(Path::to_path_buf)
    }
}

/// Marker search that falls back to the parent of the start directory
///
/// Never fails: when no ancestor carries a marker the parent of `start` is
/// used (or `start` itself when it has no parent).
#[derive(Debug, Clone, Default, new)]
pub struct MarkerRootLocator {
    markers: ProjectMarkers,
}

impl RootLocator for MarkerRootLocator {
    fn locate(&self, start: &Path) -> Result<PathBuf> {
        let anchor = self.markers.find_marked_ancestor(start).unwrap_or_else(|| {
            let fallback = start.parent().unwrap_or(start).to_path_buf();
            tracing::debug!(
                start = %start.display(),
                fallback = %fallback.display(),
                "no project marker found, using parent directory"
            );
            fallback
        });

        Ok(anchor)
    }
}

/// Marker search that fails when no ancestor carries a marker
#[derive(Debug, Clone, Default, new)]
pub struct StrictRootLocator {
    markers: ProjectMarkers,
}

impl RootLocator for StrictRootLocator {
    fn locate(&self, start: &Path) -> Result<PathBuf> {
        self.markers
            .find_marked_ancestor(start)
            .ok_or_else(|| IndexerError::AnchorNotFound {
                start: start.to_path_buf(),
            })
    }
}
