use crate::areas::project::Project;
use crate::artifacts::snapshot::fingerprint::Fingerprint;
use crate::errors::Result;
use std::io::Write;
use std::path::Path;

impl Project {
    /// Print the fingerprint of a single file
    ///
    /// The path filter is not consulted: any readable file can be hashed.
    pub fn hash_file(&mut self, file: &Path) -> Result<Fingerprint> {
        let fingerprint = Fingerprint::of_file(file)?;

        writeln!(self.writer(), "{}", fingerprint)?;

        Ok(fingerprint)
    }
}
