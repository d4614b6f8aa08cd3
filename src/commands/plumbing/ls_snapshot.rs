use crate::areas::project::Project;
use crate::errors::Result;
use std::io::Write;

impl Project {
    /// List the stored snapshot as `<fingerprint> <path>` lines in path order
    pub fn ls_snapshot(&mut self, abbrev: bool) -> Result<usize> {
        let snapshot = self.snapshot_store().load()?;

        for (path, fingerprint) in snapshot.entries() {
            let fingerprint = if abbrev {
                fingerprint.to_short()
            } else {
                fingerprint.as_ref()
            };
            writeln!(self.writer(), "{} {}", fingerprint, path)?;
        }

        Ok(snapshot.len())
    }
}
