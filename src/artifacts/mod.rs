//! Indexer data structures and algorithms
//!
//! - `diff`: snapshot comparison (added/modified/removed)
//! - `filter`: path admission rules
//! - `snapshot`: snapshot mapping and content fingerprints

pub mod diff;
pub mod filter;
pub mod snapshot;
