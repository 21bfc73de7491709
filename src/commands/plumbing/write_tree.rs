use crate::areas::repository::Repository;
use std::path::Path;

impl Repository {
    /// Snapshot the whole repository root and print the root tree ID.
    pub fn write_tree(&mut self) -> anyhow::Result<()> {
        self.database().ensure_initialized()?;

        let tree_oid = self.tree_builder().write_tree(Path::new(""))?;

        writeln!(self.writer(), "{tree_oid}")?;

        Ok(())
    }
}
