//! Porcelain commands
//!
//! - `index`: scan project paths and store a snapshot
//! - `check`: rescan and report what changed since the stored snapshot

pub mod check;
pub mod index;
