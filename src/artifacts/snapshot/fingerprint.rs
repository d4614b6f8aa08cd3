//! Content fingerprint (SHA-1 hash)
//!
//! Fingerprints are 40-character lowercase hexadecimal strings computed from
//! a file's raw bytes only. Name, location and metadata never contribute, so
//! two files with identical bytes share a fingerprint.

use crate::errors::{IoResultExt, Result};
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::io::Read;
use std::path::Path;

/// Content fingerprint of a single file
///
/// Deserialization accepts any string so snapshots written by other tools
/// still load. Only freshly hashed values are guaranteed to be 40 lowercase
/// hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Stream a file's contents through the digest
    ///
    /// The file handle is dropped before returning, on success and on a
    /// mid-stream read error alike.
    pub fn of_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).with_path(path)?;
        Self::of_reader(file).with_path(path)
    }

    pub fn of_reader(mut reader: impl Read) -> std::io::Result<Self> {
        let mut hasher = Sha1::new();
        std::io::copy(&mut reader, &mut hasher)?;

        Ok(Self(format!("{:x}", hasher.finalize())))
    }

    pub fn of_bytes(data: &[u8]) -> Self {
        Self(format!("{:x}", Sha1::digest(data)))
    }

    /// First 7 characters, for compact listings
    pub fn to_short(&self) -> &str {
        self.0.get(..7).unwrap_or(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Fingerprint {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
