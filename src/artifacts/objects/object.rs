use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::codec;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::ObjectResult;
use bytes::Bytes;

/// Encodes an object into its payload (the bytes after the header).
pub trait Packable {
    fn payload(&self) -> ObjectResult<Bytes>;
}

/// Decodes an object from its payload.
pub trait Unpackable {
    fn deserialize(payload: Bytes) -> ObjectResult<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    /// The object ID together with the framed bytes it was computed from
    fn serialize(&self) -> ObjectResult<(ObjectId, Bytes)> {
        Ok(codec::frame(self.object_type(), &self.payload()?))
    }

    fn object_id(&self) -> ObjectResult<ObjectId> {
        Ok(self.serialize()?.0)
    }
}

/// A stored object decoded into its typed representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectBox {
    Blob(Blob),
    Tree(Tree),
}

impl ObjectBox {
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(blob) => blob.object_type(),
            ObjectBox::Tree(tree) => tree.object_type(),
        }
    }

    pub fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Tree(tree) => tree.display(),
        }
    }
}
