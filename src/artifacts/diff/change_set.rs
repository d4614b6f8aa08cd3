use crate::artifacts::diff::file_change::ChangeType;
use crate::artifacts::snapshot::snapshot::Snapshot;

/// Paths that differ between a current and a prior snapshot
///
/// The three lists are disjoint and each is sorted by path. A path present
/// in both snapshots with the same fingerprint appears in none of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub(crate) added: Vec<String>,
    pub(crate) modified: Vec<String>,
    pub(crate) removed: Vec<String>,
}

impl ChangeSet {
    /// Classify every path of `current` and `prior`
    pub fn diff(current: &Snapshot, prior: &Snapshot) -> Self {
        let mut change_set = ChangeSet::default();

        for (path, fingerprint) in current.entries() {
            match prior.get(path) {
                None => change_set.added.push(path.clone()),
                Some(stored) if stored != fingerprint => change_set.modified.push(path.clone()),
                Some(_) => {}
            }
        }

        change_set.removed = prior
            .paths()
            .filter(|path| !current.contains(path))
            .cloned()
            .collect();

        change_set.sort();
        change_set
    }

    pub fn added(&self) -> &[String] {
        &self.added
    }

    pub fn modified(&self) -> &[String] {
        &self.modified
    }

    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    pub fn paths(&self, change: ChangeType) -> &[String] {
        match change {
            ChangeType::Added => &self.added,
            ChangeType::Modified => &self.modified,
            ChangeType::Removed => &self.removed,
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.removed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.added.len() + self.modified.len() + self.removed.len()
    }

    /// Every changed path with its classification, in path order
    pub fn changes(&self) -> Vec<(&str, ChangeType)> {
        let mut changes = ChangeType::ALL
            .iter()
            .flat_map(|change| {
                self.paths(*change)
                    .iter()
                    .map(move |path| (path.as_str(), *change))
            })
            .collect::<Vec<_>>();
        changes.sort();
        changes
    }

    fn sort(&mut self) {
        self.added.sort();
        self.modified.sort();
        self.removed.sort();
    }
}
