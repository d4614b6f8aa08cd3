use crate::areas::project::Project;
use crate::errors::Result;
use std::io::Write;
use std::path::PathBuf;

impl Project {
    /// Scan every path and write the merged snapshot
    ///
    /// The first root that fails to scan aborts the command before anything
    /// is written, so a stored snapshot always covers every requested root.
    pub fn index(&mut self, paths: &[PathBuf]) -> Result<usize> {
        let snapshot = self.workspace().scan_all(paths)?;

        self.snapshot_store().save(&snapshot)?;

        writeln!(self.writer(), "Indexed {} files", snapshot.len())?;
        writeln!(
            self.writer(),
            "Index written to {}",
            self.snapshot_store().path().display()
        )?;

        Ok(snapshot.len())
    }
}
