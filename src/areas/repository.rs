use crate::areas::database::Database;
use crate::areas::workspace::{METADATA_DIR, Workspace};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::snapshot::tree_builder::TreeBuilder;
use crate::errors::ObjectError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Shortest abbreviated object ID accepted from the command line
pub const MIN_ABBREV_LENGTH: usize = 4;

/// Explicit repository root shared by every command.
///
/// Nothing in the library consults the process working directory; the root
/// is resolved once by the caller and threaded through here.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve repository path {}", path.display()))?;

        let database = Database::new(path.join(METADATA_DIR).join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> std::path::PathBuf {
        self.path.join(METADATA_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn tree_builder(&self) -> TreeBuilder<'_> {
        TreeBuilder::new(&self.database, &self.workspace)
    }

    /// Resolve a full or abbreviated object ID against the object store.
    pub fn resolve_object_id(&self, revision: &str) -> anyhow::Result<ObjectId> {
        if revision.len() == OBJECT_ID_LENGTH {
            return Ok(ObjectId::try_parse(revision)?);
        }

        if revision.len() < MIN_ABBREV_LENGTH || revision.len() > OBJECT_ID_LENGTH {
            return Err(ObjectError::InvalidObjectId(revision.to_string()).into());
        }

        let candidates = self.database.find_objects_by_prefix(revision)?;
        match candidates.as_slice() {
            [] => Err(ObjectError::InvalidObjectId(revision.to_string()))
                .context(format!("No object matches {revision}")),
            [oid] => Ok(oid.clone()),
            _ => {
                let listing = candidates
                    .iter()
                    .map(|oid| self.describe_candidate(oid))
                    .collect::<Vec<_>>()
                    .join("\n");
                anyhow::bail!("short object ID {revision} is ambiguous\nThe candidates are:\n{listing}")
            }
        }
    }

    fn describe_candidate(&self, oid: &ObjectId) -> String {
        let kind = self
            .database
            .read_raw(oid)
            .map(|raw| raw.kind.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        format!("  {} {kind}", oid.to_short_oid())
    }
}
