#![allow(dead_code)]

pub mod command;
pub mod file;

pub const SNAPSHOT_FILE: &str = ".project-indexer.idx";

/// Reference digest computed independently of the indexer
pub fn sha1_hex(content: &str) -> String {
    use sha1::{Digest, Sha1};

    format!("{:x}", Sha1::digest(content.as_bytes()))
}
