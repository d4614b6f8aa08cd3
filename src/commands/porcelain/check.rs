use crate::areas::project::Project;
use crate::artifacts::diff::change_set::ChangeSet;
use crate::artifacts::diff::file_change::ChangeType;
use crate::errors::Result;
use std::io::Write;
use std::path::PathBuf;

/// Layout of the `check` report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckFormat {
    /// One titled section per change type, empty sections omitted
    #[default]
    Sections,
    /// One `<code> <path>` line per changed path
    Short,
}

impl Project {
    /// Compare the current tree against the stored snapshot
    ///
    /// The snapshot is loaded before anything is scanned; a missing snapshot
    /// fails the command and is never created here.
    pub fn check(&mut self, paths: &[PathBuf], format: CheckFormat) -> Result<ChangeSet> {
        let prior = self.snapshot_store().load()?;
        let current = self.workspace().scan_all(paths)?;

        let change_set = ChangeSet::diff(&current, &prior);
        tracing::debug!(
            added = change_set.added().len(),
            modified = change_set.modified().len(),
            removed = change_set.removed().len(),
            "comparison complete"
        );

        match format {
            CheckFormat::Sections => self.write_sections(&change_set)?,
            CheckFormat::Short => self.write_short(&change_set)?,
        }

        Ok(change_set)
    }

    fn write_sections(&self, change_set: &ChangeSet) -> Result<()> {
        if change_set.is_empty() {
            writeln!(self.writer(), "No changes detected.")?;
            return Ok(());
        }

        for change in ChangeType::ALL {
            let paths = change_set.paths(change);
            if paths.is_empty() {
                continue;
            }

            writeln!(self.writer(), "{}", change)?;
            for path in paths {
                writeln!(self.writer(), "{}", change.entry_line(path))?;
            }
        }

        Ok(())
    }

    fn write_short(&self, change_set: &ChangeSet) -> Result<()> {
        for (path, change) in change_set.changes() {
            let code: &str = (&change).into();
            writeln!(self.writer(), "{} {}", code, path)?;
        }

        Ok(())
    }
}
