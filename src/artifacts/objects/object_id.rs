//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings of the SHA-1
//! digest of a framed object. Inside tree payloads they are stored as the
//! 20 raw digest bytes instead.
//!
//! ## Storage
//!
//! Objects are stored in `.mygit/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, RAW_OBJECT_ID_LENGTH};
use crate::errors::{ObjectError, ObjectResult};
use std::path::PathBuf;

/// Object identifier (SHA-1 hash)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Uppercase hex digits are accepted and normalized to lowercase.
    pub fn try_parse(id: impl Into<String>) -> ObjectResult<Self> {
        let id = id.into();
        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ObjectError::InvalidObjectId(id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Build an object ID from the 20 raw bytes of a SHA-1 digest
    pub fn from_raw(raw: &[u8]) -> ObjectResult<Self> {
        let raw: [u8; RAW_OBJECT_ID_LENGTH] = raw.try_into().map_err(|_| {
            ObjectError::corrupt(format!(
                "expected {RAW_OBJECT_ID_LENGTH} raw hash bytes, found {}",
                raw.len()
            ))
        })?;

        Ok(raw.into())
    }

    /// The 20 raw digest bytes
    pub fn to_raw(&self) -> [u8; RAW_OBJECT_ID_LENGTH] {
        let mut raw = [0u8; RAW_OBJECT_ID_LENGTH];
        for (i, byte) in raw.iter_mut().enumerate() {
            // validated as hex on construction
            *byte = u8::from_str_radix(&self.0[i * 2..i * 2 + 2], 16).unwrap_or_default();
        }
        raw
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl From<[u8; RAW_OBJECT_ID_LENGTH]> for ObjectId {
    fn from(raw: [u8; RAW_OBJECT_ID_LENGTH]) -> Self {
        Self(raw.iter().map(|byte| format!("{byte:02x}")).collect())
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
