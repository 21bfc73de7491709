//! Blob object
//!
//! Blobs store file content (or a symlink's target path). They contain only
//! the raw bytes, without any metadata like file name or permissions; those
//! live in the tree entry that references the blob.
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::ObjectResult;
use bytes::Bytes;
use derive_new::new;

/// Binary-safe file content
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    #[new(into)]
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn into_content(self) -> Bytes {
        self.content
    }
}

impl Packable for Blob {
    fn payload(&self) -> ObjectResult<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(payload: Bytes) -> ObjectResult<Self> {
        Ok(Self::new(payload))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}
