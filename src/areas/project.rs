use crate::areas::snapshot_store::SnapshotStore;
use crate::areas::workspace::Workspace;
use crate::config::IndexerConfig;
use crate::errors::Result;
use std::cell::{RefCell, RefMut};

/// Entry point tying the scanner and the snapshot store together
///
/// Commands are implemented as `impl Project` blocks and write their report
/// to the injected writer.
pub struct Project {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    snapshot_store: SnapshotStore,
}

impl Project {
    pub fn new(config: &IndexerConfig, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let snapshot_store = config.snapshot_store();
        let workspace = Workspace::new(config.path_filter()?, config.root_locator());

        Ok(Project {
            writer: RefCell::new(writer),
            workspace,
            snapshot_store,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn snapshot_store(&self) -> &SnapshotStore {
        &self.snapshot_store
    }
}
