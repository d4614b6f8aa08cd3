//! Path admission rules
//!
//! Decides which project-relative paths are fingerprinted. Rules are plain
//! values assembled into a [`path_filter::PathFilter`] and evaluated in order:
//!
//! 1. snapshot files (the configured name, or the reserved `.idx` extension)
//! 2. version-control metadata directories
//! 3. user supplied ignore patterns
//! 4. test files (`*.test.{tsx,ts,js,jsx,json}`)
//! 5. the extension allow-list
//!
//! Matching is case-sensitive throughout.

pub mod filter_rule;
pub mod path_filter;

/// Directory segments that mark version-control metadata
pub const VCS_DIRECTORIES: [&str; 1] = [".git"];

/// Extensions eligible for fingerprinting
pub const ALLOWED_EXTENSIONS: [&str; 16] = [
    // source and markup
    "php", "ts", "js", "tsx", "jsx", "mjs", "cjs", "mts", "json", "gql",
    // styling
    "css", "sass", "scss",
    // assets
    "png", "svg", "jpg",
];

/// Extensions that, preceded by `.test.`, mark a test file
pub const TEST_FILE_EXTENSIONS: [&str; 5] = ["tsx", "ts", "js", "jsx", "json"];
