use crate::areas::database::Database;
use crate::areas::workspace::{Workspace, WorkspaceEntry};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{Tree, TreeEntry};
use crate::errors::{ObjectError, ObjectResult};
use derive_new::new;
use std::path::Path;

/// Snapshots a directory hierarchy into blob and tree objects.
///
/// Children are stored before their parent, so every ID referenced by a
/// stored tree already resolves in the database.
#[derive(Debug, new)]
pub struct TreeBuilder<'r> {
    database: &'r Database,
    workspace: &'r Workspace,
}

impl TreeBuilder<'_> {
    /// Store the tree for `dir_path` (and everything below it) and return its ID.
    ///
    /// The first entry that cannot be read aborts the whole walk.
    pub fn write_tree(&self, dir_path: &Path) -> ObjectResult<ObjectId> {
        let mut entries = Vec::new();

        for entry in self.workspace.list_dir(dir_path)? {
            let oid = self.write_entry(&entry)?;
            let tree_entry = TreeEntry::try_new(entry.mode, entry.name, oid).map_err(|err| {
                ObjectError::unreadable(
                    &entry.path,
                    std::io::Error::new(std::io::ErrorKind::InvalidData, err.to_string()),
                )
            })?;
            entries.push(tree_entry);
        }

        // list_dir already yields entries in name order
        let tree = Tree::from_entries(entries);
        let tree_oid = self.database.store(&tree)?;
        tracing::debug!(
            path = %self.workspace.path().join(dir_path).display(),
            oid = %tree_oid,
            entries = tree.len(),
            "wrote tree"
        );

        Ok(tree_oid)
    }

    fn write_entry(&self, entry: &WorkspaceEntry) -> ObjectResult<ObjectId> {
        tracing::trace!(path = %entry.path.display(), mode = %entry.mode, "visiting entry");

        match entry.mode {
            EntryMode::Directory => self.write_tree(&entry.path),
            EntryMode::Symlink => {
                let target = self.workspace.read_link(&entry.path)?;
                self.database.store(&Blob::new(target))
            }
            EntryMode::File(_) => {
                let content = self.workspace.read_file(&entry.path)?;
                self.database.store(&Blob::new(content))
            }
        }
    }
}
