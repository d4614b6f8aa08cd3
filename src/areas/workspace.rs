use crate::areas::root_locator::RootLocator;
use crate::artifacts::filter::path_filter::PathFilter;
use crate::artifacts::snapshot::fingerprint::Fingerprint;
use crate::artifacts::snapshot::snapshot::Snapshot;
use crate::errors::{IndexerError, IoResultExt, Result};
use derive_new::new;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Tree scanner producing snapshots of project files
#[derive(Debug, new)]
pub struct Workspace {
    filter: PathFilter,
    locator: Box<dyn RootLocator>,
}

impl Workspace {
    /// Scan several roots one after another, merging last-scan-wins
    ///
    /// The first failing root aborts the whole scan.
    pub fn scan_all<P: AsRef<Path>>(&self, roots: &[P]) -> Result<Snapshot> {
        let mut snapshot = Snapshot::new();
        for root in roots {
            snapshot.merge(self.scan(root.as_ref())?);
        }

        Ok(snapshot)
    }

    /// Fingerprint every admitted file below `root`
    ///
    /// Keys are relative to the anchor the root locator picks for `root`.
    /// Any unreadable directory or file fails the scan.
    pub fn scan(&self, root: &Path) -> Result<Snapshot> {
        let root = std::fs::canonicalize(root).with_path(root)?;
        let anchor = self.locator.locate(&root)?;
        tracing::debug!(root = %root.display(), anchor = %anchor.display(), "scanning");

        let mut snapshot = Snapshot::new();
        let entries = WalkDir::new(&root)
            .into_iter()
            .filter_entry(|entry| !self.is_pruned(entry));

        for entry in entries {
            let entry = entry.map_err(|err| Self::walk_error(&root, err))?;
            // symlinks and special files are not tracked
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(relative_path) = Self::relative_key(&anchor, entry.path()) else {
                if entry.path().to_str().is_none() {
                    tracing::warn!(
                        path = %entry.path().display(),
                        "skipped: name is not valid UTF-8"
                    );
                }
                continue;
            };

            if !self.filter.admits(&relative_path) {
                tracing::trace!(path = %relative_path, "skipped");
                continue;
            }

            let fingerprint = Fingerprint::of_file(entry.path())?;
            snapshot.add(relative_path, fingerprint);
        }

        tracing::debug!(root = %root.display(), files = snapshot.len(), "scan complete");
        Ok(snapshot)
    }

    /// Project-relative, `/`-separated key for `path`
    ///
    /// Returns None when `path` does not lie below `anchor` or one of its
    /// segments is not valid UTF-8. Segments are never converted lossily.
    pub fn relative_key(anchor: &Path, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(anchor).ok()?;

        let segments = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_str()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        if segments.is_empty() {
            return None;
        }

        Some(segments.join("/"))
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self
                .filter
                .prunes_directory(&entry.file_name().to_string_lossy())
    }

    fn walk_error(root: &Path, err: walkdir::Error) -> IndexerError {
        let path = err.path().map(PathBuf::from).unwrap_or_else(|| root.to_path_buf());
        IndexerError::io(path, std::io::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::root_locator::MarkerRootLocator;
    use crate::artifacts::snapshot::DEFAULT_SNAPSHOT_NAME;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteStr, PathChild, PathCreateDir};
    use pretty_assertions::assert_eq;

    fn workspace() -> Workspace {
        Workspace::new(
            PathFilter::standard(DEFAULT_SNAPSHOT_NAME),
            Box::new(MarkerRootLocator::default()),
        )
    }

    fn project() -> anyhow::Result<TempDir> {
        let dir = TempDir::new()?;
        dir.child(".git").create_dir_all()?;
        dir.child(".git/hooks/pre-commit.js").write_str("hook")?;
        dir.child("src/app.ts").write_str("export const app = 1;\n")?;
        dir.child("src/app.test.ts").write_str("test('app')\n")?;
        dir.child("src/styles/main.scss").write_str("body {}\n")?;
        dir.child("README.md").write_str("# readme\n")?;
        dir.child(DEFAULT_SNAPSHOT_NAME).write_str("{}\n")?;
        Ok(dir)
    }

    #[test]
    fn scan_keys_admitted_files_relative_to_the_project_root() -> anyhow::Result<()> {
        let dir = project()?;

        let snapshot = workspace().scan(dir.path())?;

        let paths = snapshot.paths().cloned().collect::<Vec<_>>();
        assert_eq!(paths, vec!["src/app.ts", "src/styles/main.scss"]);
        assert_eq!(
            snapshot.get("src/app.ts"),
            Some(&Fingerprint::of_bytes(b"export const app = 1;\n"))
        );

        Ok(())
    }

    #[test]
    fn subdirectory_scan_produces_root_relative_keys() -> anyhow::Result<()> {
        let dir = project()?;

        let full = workspace().scan(dir.path())?;
        let partial = workspace().scan(dir.child("src/styles").path())?;

        assert_eq!(partial.paths().cloned().collect::<Vec<_>>(), vec!["src/styles/main.scss"]);
        assert_eq!(partial.get("src/styles/main.scss"), full.get("src/styles/main.scss"));

        Ok(())
    }

    #[test]
    fn rescanning_an_unchanged_tree_is_stable() -> anyhow::Result<()> {
        let dir = project()?;

        assert_eq!(workspace().scan(dir.path())?, workspace().scan(dir.path())?);

        Ok(())
    }

    #[test]
    fn scan_all_merges_roots() -> anyhow::Result<()> {
        let dir = project()?;
        dir.child("api/index.php").write_str("<?php echo 1;")?;

        let snapshot = workspace().scan_all(&[dir.child("src").path(), dir.child("api").path()])?;

        assert!(snapshot.contains("src/app.ts"));
        assert!(snapshot.contains("api/index.php"));
        assert_eq!(snapshot.len(), 3);

        Ok(())
    }

    #[test]
    fn missing_root_fails_the_scan() -> anyhow::Result<()> {
        let dir = project()?;

        let err = workspace().scan(dir.child("does-not-exist").path()).unwrap_err();
        assert!(matches!(err, IndexerError::Io { .. }));

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_file_fails_the_scan() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = project()?;
        let locked = dir.child("src/locked.ts");
        locked.write_str("secret")?;
        std::fs::set_permissions(locked.path(), std::fs::Permissions::from_mode(0o000))?;

        // root ignores permission bits
        if std::fs::File::open(locked.path()).is_ok() {
            return Ok(());
        }

        let result = workspace().scan(dir.path());
        std::fs::set_permissions(locked.path(), std::fs::Permissions::from_mode(0o644))?;

        assert!(matches!(
            result,
            Err(IndexerError::Io { ref path, .. }) if path.ends_with("src/locked.ts")
        ));

        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn names_that_are_not_utf8_are_skipped_not_merged() -> anyhow::Result<()> {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = project()?;
        let src = dir.child("src");
        std::fs::write(src.path().join(OsStr::from_bytes(b"caf\xe9.ts")), "latin-1")?;
        std::fs::write(src.path().join(OsStr::from_bytes(b"caf\xe8.ts")), "other")?;

        let snapshot = workspace().scan(dir.path())?;

        assert_eq!(
            snapshot.paths().cloned().collect::<Vec<_>>(),
            vec!["src/app.ts", "src/styles/main.scss"]
        );
        let not_utf8 = src.path().join(OsStr::from_bytes(b"caf\xe9.ts"));
        assert_eq!(Workspace::relative_key(dir.path(), &not_utf8), None);

        Ok(())
    }

    #[test]
    fn relative_keys_use_forward_slashes() {
        let anchor = Path::new("/work/project");

        assert_eq!(
            Workspace::relative_key(anchor, &anchor.join("web").join("src").join("a.ts")),
            Some("web/src/a.ts".to_string())
        );
        assert_eq!(Workspace::relative_key(anchor, anchor), None);
        assert_eq!(Workspace::relative_key(anchor, Path::new("/elsewhere/a.ts")), None);
    }
}
