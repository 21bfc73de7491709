//! Object store
//!
//! Maps object IDs to zlib-compressed files under `.mygit/objects`, sharded by
//! the first two hex characters of the ID. Objects are written once and never
//! rewritten: an existing file for an ID already holds the same bytes.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::codec::{self, RawObject};
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{ObjectError, ObjectResult};
use bytes::Bytes;
use fake::rand;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Persist an already framed object and return its ID.
    ///
    /// The ID is returned whether or not the object had to be written.
    pub fn put(&self, framed: Bytes) -> ObjectResult<ObjectId> {
        self.ensure_initialized()?;

        let object_id = codec::hash(&framed);
        let object_path = self.path.join(object_id.to_path());

        // write the object to disk unless it already exists
        if object_path.exists() {
            tracing::trace!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        let object_dir = object_path
            .parent()
            .ok_or_else(|| ObjectError::corrupt_object(&object_id, "invalid object path"))?;
        std::fs::create_dir_all(object_dir)?;

        self.write_object(&object_path, &framed)?;
        tracing::debug!(oid = %object_id, size = framed.len(), "stored object");

        Ok(object_id)
    }

    /// Frame a typed object and persist it.
    pub fn store(&self, object: &impl Object) -> ObjectResult<ObjectId> {
        let (_, framed) = object.serialize()?;
        self.put(framed)
    }

    /// Read and decompress the framed bytes of an object.
    pub fn get(&self, object_id: &ObjectId) -> ObjectResult<Bytes> {
        self.ensure_initialized()?;

        let object_path = self.path.join(object_id.to_path());
        let compressed = match std::fs::read(&object_path) {
            Ok(compressed) => compressed,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ObjectError::ObjectNotFound(object_id.clone()));
            }
            Err(err) => return Err(err.into()),
        };

        let framed = Self::decompress(&compressed)
            .map_err(|err| ObjectError::corrupt_object(object_id, err.to_string()))?;

        let actual_id = codec::hash(&framed);
        if &actual_id != object_id {
            return Err(ObjectError::corrupt_object(
                object_id,
                format!("content hashes to {actual_id}"),
            ));
        }

        Ok(framed)
    }

    pub fn contains(&self, object_id: &ObjectId) -> ObjectResult<bool> {
        self.ensure_initialized()?;
        Ok(self.path.join(object_id.to_path()).is_file())
    }

    /// Read an object and split it into header fields and payload.
    pub fn read_raw(&self, object_id: &ObjectId) -> ObjectResult<RawObject> {
        codec::unframe(self.get(object_id)?).map_err(|err| err.with_oid(object_id))
    }

    /// Decode a stored object into its typed representation.
    pub fn inspect(&self, object_id: &ObjectId) -> ObjectResult<ObjectBox> {
        self.decode(object_id, self.read_raw(object_id)?)
    }

    /// Decode the payload of an object that was already read with `read_raw`.
    pub fn decode(&self, object_id: &ObjectId, raw: RawObject) -> ObjectResult<ObjectBox> {
        tracing::trace!(oid = %object_id, kind = %raw.kind, size = raw.size, "decoding object");

        let object = match raw.kind {
            ObjectType::Blob => ObjectBox::Blob(Blob::deserialize(raw.payload)?),
            ObjectType::Tree => ObjectBox::Tree(
                Tree::deserialize(raw.payload).map_err(|err| err.with_oid(object_id))?,
            ),
        };

        Ok(object)
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> ObjectResult<Option<Tree>> {
        match self.inspect(object_id)? {
            ObjectBox::Tree(tree) => Ok(Some(tree)),
            ObjectBox::Blob(_) => Ok(None),
        }
    }

    /// Find all objects whose ID starts with the given hex prefix.
    ///
    /// Used to resolve abbreviated IDs. More than one match means the prefix is
    /// ambiguous; the caller decides how to report that.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> ObjectResult<Vec<ObjectId>> {
        self.ensure_initialized()?;

        let prefix = prefix.to_ascii_lowercase();
        if !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(Vec::new());
        }

        let shards = if prefix.len() >= 2 {
            vec![prefix[..2].to_string()]
        } else {
            (0..=255u8).map(|i| format!("{i:02x}")).collect()
        };

        let mut matches = Vec::new();
        for shard in shards {
            let shard_path = self.path.join(&shard);
            if !shard_path.is_dir() {
                continue;
            }

            for entry in std::fs::read_dir(&shard_path)? {
                let file_name = entry?.file_name();
                let full_oid = format!("{shard}{}", file_name.to_string_lossy());

                if full_oid.starts_with(&prefix) {
                    // temporary files from in-flight writes are not objects
                    if let Ok(oid) = ObjectId::try_parse(full_oid) {
                        matches.push(oid);
                    }
                }
            }
        }
        matches.sort();

        Ok(matches)
    }

    /// Fail early when the objects directory has not been created.
    pub fn ensure_initialized(&self) -> ObjectResult<()> {
        if self.path.is_dir() {
            Ok(())
        } else {
            Err(ObjectError::RepositoryNotInitialized(self.path.to_path_buf()))
        }
    }

    fn write_object(&self, object_path: &Path, framed: &[u8]) -> ObjectResult<()> {
        let temp_object_path = Self::temp_path_for(object_path);
        let compressed = Self::compress(framed)?;

        Self::write_temp_file(&temp_object_path, |file| file.write_all(&compressed))?;
        Self::install_temp_file(&temp_object_path, object_path)
    }

    /// Create `temp_path` and fill it; the file is removed again if filling fails.
    fn write_temp_file(
        temp_path: &Path,
        fill: impl FnOnce(&mut std::fs::File) -> std::io::Result<()>,
    ) -> ObjectResult<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(temp_path)?;

        if let Err(err) = fill(&mut file) {
            drop(file);
            let _ = std::fs::remove_file(temp_path);
            return Err(err.into());
        }

        Ok(())
    }

    /// Rename a finished temp file onto the object path.
    fn install_temp_file(temp_path: &Path, object_path: &Path) -> ObjectResult<()> {
        // rename the temp file to the object file to make it atomic
        if let Err(err) = std::fs::rename(temp_path, object_path) {
            let _ = std::fs::remove_file(temp_path);
            // another writer won the race with identical bytes
            if !object_path.exists() {
                return Err(err.into());
            }
        }

        Ok(())
    }

    fn temp_path_for(object_path: &Path) -> PathBuf {
        object_path.with_file_name(format!("tmp-obj-{}", rand::random::<u32>()))
    }

    fn compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;
        encoder.finish()
    }

    fn decompress(data: &[u8]) -> std::io::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }
}
