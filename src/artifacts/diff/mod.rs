//! Snapshot comparison
//!
//! - `change_set`: the diff engine and its result
//! - `file_change`: change classification and its section labels

pub mod change_set;
pub mod file_change;
