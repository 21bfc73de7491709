//! Tree object
//!
//! Trees represent directory snapshots. They contain entries for files and
//! symlinks (blobs) and subdirectories (other trees), along with their names
//! and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`, entries concatenated without
//! separators in byte-wise name order.

use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{ObjectError, ObjectResult};
use bytes::{BufMut, Bytes, BytesMut};

/// One `(mode, name, oid)` line of a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub mode: EntryMode,
    pub name: String,
    pub oid: ObjectId,
}

impl TreeEntry {
    /// Create an entry, rejecting names that cannot be encoded in a tree
    pub fn try_new(mode: EntryMode, name: impl Into<String>, oid: ObjectId) -> ObjectResult<Self> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self { mode, name, oid })
    }

    pub fn is_tree(&self) -> bool {
        self.mode.is_tree()
    }

    pub fn object_type(&self) -> ObjectType {
        if self.is_tree() {
            ObjectType::Tree
        } else {
            ObjectType::Blob
        }
    }

    fn write_to(&self, buffer: &mut BytesMut) {
        buffer.put_slice(self.mode.as_str().as_bytes());
        buffer.put_u8(b' ');
        buffer.put_slice(self.name.as_bytes());
        buffer.put_u8(b'\0');
        buffer.put_slice(&self.oid.to_raw());
    }
}

fn validate_name(name: &str) -> ObjectResult<()> {
    if name.is_empty() || name.contains(['\0', '/']) {
        return Err(ObjectError::corrupt(format!(
            "invalid tree entry name {name:?}"
        )));
    }
    Ok(())
}

/// Ordered list of tree entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Build a tree, ordering the entries byte-wise by name
    pub fn from_entries(mut entries: Vec<TreeEntry>) -> Self {
        entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        Tree { entries }
    }

    pub fn entries(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = TreeEntry> {
        self.entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Packable for Tree {
    fn payload(&self) -> ObjectResult<Bytes> {
        let mut payload = BytesMut::new();
        for entry in &self.entries {
            entry.write_to(&mut payload);
        }

        Ok(payload.freeze())
    }
}

impl Unpackable for Tree {
    fn deserialize(payload: Bytes) -> ObjectResult<Self> {
        let mut entries = Vec::new();
        let mut cursor = 0;

        while cursor < payload.len() {
            let rest = &payload[cursor..];
            let nul = rest
                .iter()
                .position(|&byte| byte == b'\0')
                .ok_or_else(|| ObjectError::corrupt("unexpected EOF in tree entry header"))?;

            let header = std::str::from_utf8(&rest[..nul])
                .map_err(|_| ObjectError::corrupt("tree entry header is not valid UTF-8"))?;
            let (mode, name) = header.split_once(' ').ok_or_else(|| {
                ObjectError::corrupt(format!("missing space in tree entry {header:?}"))
            })?;

            let oid_start = nul + 1;
            let oid_end = oid_start + RAW_OBJECT_ID_LENGTH;
            if rest.len() < oid_end {
                return Err(ObjectError::corrupt(format!(
                    "unexpected EOF in object id of tree entry {name:?}"
                )));
            }

            let entry = TreeEntry::try_new(
                EntryMode::try_from(mode)?,
                name,
                ObjectId::from_raw(&rest[oid_start..oid_end])?,
            )?;
            entries.push(entry);

            cursor += oid_end;
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{:0>6} {} {}\t{}",
                    entry.mode.as_str(),
                    entry.object_type(),
                    entry.oid,
                    entry.name
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}
