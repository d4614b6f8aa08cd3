//! Snapshot persistence
//!
//! Snapshots are stored as a flat JSON object mapping relative paths to
//! fingerprints, terminated by a newline.
//!
//! Writes never touch the target in place: the encoded snapshot goes to a
//! temporary file in the target's directory which is then renamed over the
//! target. A failure at any step leaves the previous snapshot intact, and the
//! temporary file is removed when its guard drops.

use crate::artifacts::snapshot::snapshot::Snapshot;
use crate::artifacts::snapshot::{DEFAULT_SNAPSHOT_NAME, SNAPSHOT_EXTENSION};
use crate::errors::{IndexerError, IoResultExt, Result};
use derive_new::new;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, new)]
pub struct SnapshotStore {
    path: Box<Path>,
}

impl SnapshotStore {
    /// Store for a user supplied location
    ///
    /// A location ending in `.idx` names the snapshot file itself. Anything
    /// else names the directory that holds `.project-indexer.idx`.
    pub fn at(location: &Path) -> Self {
        Self::new(Self::resolve(location).into_boxed_path())
    }

    pub fn resolve(location: &Path) -> PathBuf {
        if location.to_string_lossy().ends_with(SNAPSHOT_EXTENSION) {
            location.to_path_buf()
        } else {
            location.join(DEFAULT_SNAPSHOT_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the snapshot, as seen by the path filter
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_SNAPSHOT_NAME.to_string())
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn load(&self) -> Result<Snapshot> {
        let content = std::fs::read(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => IndexerError::SnapshotNotFound {
                path: self.path.to_path_buf(),
            },
            _ => IndexerError::io(&self.path, source),
        })?;

        serde_json::from_slice(&content).map_err(|source| IndexerError::SnapshotFormat {
            path: self.path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let target_dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp_file = tempfile::Builder::new()
            .prefix(".tmp-snapshot-")
            .tempfile_in(target_dir)
            .with_path(target_dir)?;

        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer(&mut writer, snapshot)
                .map_err(std::io::Error::from)
                .with_path(temp_file.path())?;
            writer.write_all(b"\n").with_path(temp_file.path())?;
            writer.flush().with_path(temp_file.path())?;
        }
        temp_file.as_file().sync_all().with_path(temp_file.path())?;

        // rename the temp file over the target to make the write atomic
        temp_file
            .persist(&self.path)
            .map_err(|err| IndexerError::io(&self.path, err.error))?;

        tracing::debug!(path = %self.path.display(), entries = snapshot.len(), "snapshot written");
        Ok(())
    }
}
