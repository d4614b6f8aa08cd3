use colored::Colorize;

const ENTRY_INDENT: usize = 3;

/// Classification of a single path between two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeType {
    Added,
    Modified,
    Removed,
}

impl ChangeType {
    pub const ALL: [ChangeType; 3] = [ChangeType::Added, ChangeType::Modified, ChangeType::Removed];

    pub fn section_title(&self) -> &'static str {
        match self {
            ChangeType::Added => "Added files:",
            ChangeType::Modified => "Modified files:",
            ChangeType::Removed => "Removed files:",
        }
    }

    /// Render one entry line of a report section
    pub fn entry_line(&self, path: &str) -> String {
        let path = match self {
            ChangeType::Added => path.green(),
            ChangeType::Modified => path.yellow(),
            ChangeType::Removed => path.red(),
        };
        format!("{:>width$}{}", "", path, width = ENTRY_INDENT)
    }
}

impl From<&ChangeType> for &str {
    fn from(change: &ChangeType) -> Self {
        match change {
            ChangeType::Added => "A",
            ChangeType::Modified => "M",
            ChangeType::Removed => "D",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = self.section_title();
        let colored_title = match self {
            ChangeType::Added => title.green(),
            ChangeType::Modified => title.yellow(),
            ChangeType::Removed => title.red(),
        };
        write!(f, "{}", colored_title)
    }
}
