//! Content-hash based change detection for project trees
//!
//! A scan fingerprints every eligible file under one or more roots and keys
//! it by its path relative to the enclosing project root. Snapshots are
//! stored on disk and later compared against a fresh scan to report added,
//! modified and removed files.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
