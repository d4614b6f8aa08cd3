//! Stateful collaborators
//!
//! - `project`: ties scanner, store and output together; commands hang off it
//! - `root_locator`: project root (anchor) resolution
//! - `snapshot_store`: atomic snapshot persistence
//! - `workspace`: directory walk producing snapshots

pub mod project;
pub mod root_locator;
pub mod snapshot_store;
pub mod workspace;
