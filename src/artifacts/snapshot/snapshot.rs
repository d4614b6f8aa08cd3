use crate::artifacts::snapshot::fingerprint::Fingerprint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from project-relative path to content fingerprint
///
/// Keys are forward-slash separated and never start with `./` or `/`.
/// Entries are kept in path order so listings and serialized output are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: BTreeMap<String, Fingerprint>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<String>, fingerprint: Fingerprint) {
        self.entries.insert(path.into(), fingerprint);
    }

    pub fn get(&self, path: &str) -> Option<&Fingerprint> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &Fingerprint)> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Merge another snapshot into this one
    ///
    /// On a duplicate path the incoming fingerprint wins.
    pub fn merge(&mut self, other: Snapshot) {
        self.entries.extend(other.entries);
    }
}

impl<P: Into<String>> FromIterator<(P, Fingerprint)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (P, Fingerprint)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(path, fingerprint)| (path.into(), fingerprint))
                .collect(),
        }
    }
}
