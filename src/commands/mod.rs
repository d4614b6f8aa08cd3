//! Command implementations
//!
//! - `plumbing`: single-purpose building blocks (`hash-file`, `ls-snapshot`)
//! - `porcelain`: the CI-facing workflow (`index`, `check`)

pub mod plumbing;
pub mod porcelain;
