use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;

const SEPARATOR: &str = "-------------------------";

impl Repository {
    /// Print an object's header fields followed by its decoded payload.
    ///
    /// Blobs are printed as (lossy) text, trees as one `<mode> <name> <oid>`
    /// line per entry.
    pub fn inspect_object(&mut self, revision: &str) -> anyhow::Result<()> {
        let object_id = self.resolve_object_id(revision)?;
        let raw = self.database().read_raw(&object_id)?;
        let (kind, size) = (raw.kind, raw.size);

        let object = self.database().decode(&object_id, raw)?;

        let mut writer = self.writer();
        writeln!(writer, "type: {kind}")?;
        writeln!(writer, "size: {size}")?;
        writeln!(writer, "{SEPARATOR}")?;

        match object {
            ObjectBox::Blob(blob) => {
                writeln!(writer, "{}", String::from_utf8_lossy(blob.content()))?;
            }
            ObjectBox::Tree(tree) => {
                for entry in tree.entries() {
                    writeln!(writer, "{} {} {}", entry.mode, entry.name, entry.oid)?;
                }
            }
        }

        Ok(())
    }
}
