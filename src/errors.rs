//! Typed failures of the object store, codec, tree builder and inspector.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    /// The object kind is neither `blob` nor `tree`.
    #[error("invalid object kind: {0:?}")]
    InvalidKind(String),

    /// The string is not a 40-character hexadecimal object id.
    #[error("invalid object id: {0:?}")]
    InvalidObjectId(String),

    /// Malformed header, size mismatch, truncated tree entry or undecodable data.
    #[error("corrupt object{}: {reason}", .oid.as_ref().map(|oid| format!(" {oid}")).unwrap_or_default())]
    CorruptObject {
        oid: Option<ObjectId>,
        reason: String,
    },

    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    /// A workspace entry could not be listed, inspected or read while building a tree.
    #[error("unable to read {}: {source}", .path.display())]
    UnreadableEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a mygit repository (missing {})", .0.display())]
    RepositoryNotInitialized(PathBuf),

    /// I/O failure while writing to the object store.
    #[error("object store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ObjectError {
    pub fn corrupt(reason: impl Into<String>) -> Self {
        ObjectError::CorruptObject {
            oid: None,
            reason: reason.into(),
        }
    }

    pub fn corrupt_object(oid: &ObjectId, reason: impl Into<String>) -> Self {
        ObjectError::CorruptObject {
            oid: Some(oid.clone()),
            reason: reason.into(),
        }
    }

    /// Attach the ID of the object being decoded to a corruption error.
    pub fn with_oid(self, object_id: &ObjectId) -> Self {
        match self {
            ObjectError::CorruptObject { oid: None, reason } => {
                ObjectError::corrupt_object(object_id, reason)
            }
            err => err,
        }
    }

    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ObjectError::UnreadableEntry {
            path: path.into(),
            source,
        }
    }
}

pub type ObjectResult<T> = Result<T, ObjectError>;
