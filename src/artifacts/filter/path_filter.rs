use crate::artifacts::filter::filter_rule::FilterRule;
use crate::errors::Result;

/// Ordered set of admission rules
///
/// A path is admitted when no rule rejects it. Rules are checked in insertion
/// order and evaluation stops at the first rejection.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    rules: Vec<FilterRule>,
}

impl PathFilter {
    /// A filter without rules admits every path
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(rules: Vec<FilterRule>) -> Self {
        Self { rules }
    }

    /// The standard rule set guarding the given snapshot file name
    pub fn standard(snapshot_name: &str) -> Self {
        Self::new(vec![
            FilterRule::snapshot_file(snapshot_name),
            FilterRule::vcs_directories(),
            FilterRule::test_files(),
            FilterRule::allowed_extensions(),
        ])
    }

    /// The standard rule set with extra rejection patterns
    ///
    /// Ignore patterns sit after the VCS rule and before the test-file rule.
    pub fn with_ignore_patterns(snapshot_name: &str, patterns: &[String]) -> Result<Self> {
        let mut filter = Self::standard(snapshot_name);
        for (offset, pattern) in patterns.iter().enumerate() {
            filter
                .rules
                .insert(2 + offset, FilterRule::ignore_pattern(pattern)?);
        }

        Ok(filter)
    }

    pub fn with_rule(mut self, rule: FilterRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    pub fn admits(&self, path: &str) -> bool {
        !self.rules.iter().any(|rule| rule.rejects(path))
    }

    pub fn prunes_directory(&self, dir_name: &str) -> bool {
        self.rules.iter().any(|rule| rule.prunes_directory(dir_name))
    }
}
