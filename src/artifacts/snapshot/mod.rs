//! Snapshot data structures
//!
//! A snapshot maps project-relative paths to content fingerprints. It is the
//! unit the store persists and the diff engine compares.
//!
//! ## File Format
//!
//! ```text
//! {"src/app.ts":"2aae6c35c94fcfb415dbe95f408b9ce91ee846ed", ...}
//! ```

pub mod fingerprint;
pub mod snapshot;

/// Length of a SHA-1 hash in hexadecimal format
pub const FINGERPRINT_LENGTH: usize = 40;

/// Default snapshot file name
pub const DEFAULT_SNAPSHOT_NAME: &str = ".project-indexer.idx";

/// Extension reserved for snapshot files, never scanned
pub const SNAPSHOT_EXTENSION: &str = ".idx";
