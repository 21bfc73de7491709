use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::{Path, PathBuf};

impl Repository {
    /// List a tree's entries, descending into sub-trees when `recursive` is set.
    pub fn ls_tree(&mut self, revision: &str, recursive: bool) -> anyhow::Result<()> {
        let oid = self.resolve_object_id(revision)?;

        if self.database().parse_object_as_tree(&oid)?.is_none() {
            anyhow::bail!("{oid} is not a tree object");
        }

        self.list_tree(&oid, None, recursive)
    }

    fn list_tree(
        &self,
        oid: &ObjectId,
        prefix: Option<&Path>,
        recursive: bool,
    ) -> anyhow::Result<()> {
        let Some(tree) = self.database().parse_object_as_tree(oid)? else {
            return Ok(());
        };

        for entry in tree.into_entries() {
            let path = match prefix {
                Some(prefix) => prefix.join(&entry.name),
                None => PathBuf::from(&entry.name),
            };

            if recursive && entry.is_tree() {
                self.list_tree(&entry.oid, Some(&path), recursive)?;
            } else {
                writeln!(
                    self.writer(),
                    "{:0>6} {} {}\t{}",
                    entry.mode.as_str(),
                    entry.object_type(),
                    entry.oid,
                    path.display()
                )?;
            }
        }

        Ok(())
    }
}
