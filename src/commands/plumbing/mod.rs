//! Plumbing commands
//!
//! - `hash-file`: fingerprint a single file
//! - `ls-snapshot`: list the entries of a stored snapshot

pub mod hash_file;
pub mod ls_snapshot;
