use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use std::io::Write;

/// What `cat-file` prints about an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    Pretty,
    Type,
    Size,
}

impl Repository {
    pub fn cat_file(&mut self, revision: &str, mode: CatFileMode) -> anyhow::Result<()> {
        let object_id = self.resolve_object_id(revision)?;

        match mode {
            CatFileMode::Type => {
                let raw = self.database().read_raw(&object_id)?;
                writeln!(self.writer(), "{}", raw.kind)?;
            }
            CatFileMode::Size => {
                let raw = self.database().read_raw(&object_id)?;
                writeln!(self.writer(), "{}", raw.size)?;
            }
            CatFileMode::Pretty => match self.database().inspect(&object_id)? {
                // blob content is written verbatim so binary files survive
                ObjectBox::Blob(blob) => self.writer().write_all(blob.content())?,
                // an empty tree prints nothing at all
                ObjectBox::Tree(tree) if tree.is_empty() => {}
                tree @ ObjectBox::Tree(_) => writeln!(self.writer(), "{}", tree.display())?,
            },
        }

        Ok(())
    }
}
