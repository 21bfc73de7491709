//! Object framing and hashing
//!
//! Every object is framed as `<kind> <size>\0<payload>` before it is hashed
//! and compressed. The size is the decimal byte length of the payload only.

use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{ObjectError, ObjectResult};
use bytes::{BufMut, Bytes, BytesMut};
use derive_new::new;
use sha1::{Digest, Sha1};

/// A decoded frame: the kind and declared size from the header plus the payload.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RawObject {
    pub kind: ObjectType,
    pub size: usize,
    pub payload: Bytes,
}

/// Frame a payload and compute its object ID.
pub fn frame(kind: ObjectType, payload: &[u8]) -> (ObjectId, Bytes) {
    let header = format!("{} {}\0", kind.as_str(), payload.len());

    let mut framed = BytesMut::with_capacity(header.len() + payload.len());
    framed.put_slice(header.as_bytes());
    framed.put_slice(payload);
    let framed = framed.freeze();

    (hash(&framed), framed)
}

/// Frame a payload whose kind is given as text, failing on unknown kinds.
pub fn frame_kind(kind: &str, payload: &[u8]) -> ObjectResult<(ObjectId, Bytes)> {
    Ok(frame(ObjectType::try_from(kind)?, payload))
}

/// SHA-1 of already framed bytes.
pub fn hash(framed: &[u8]) -> ObjectId {
    let mut raw = [0u8; RAW_OBJECT_ID_LENGTH];
    raw.copy_from_slice(&Sha1::digest(framed));
    raw.into()
}

/// Split a framed object at its first NUL and validate the header.
pub fn unframe(framed: Bytes) -> ObjectResult<RawObject> {
    let nul = framed
        .iter()
        .position(|&byte| byte == b'\0')
        .ok_or_else(|| ObjectError::corrupt("missing NUL after object header"))?;

    let header = std::str::from_utf8(&framed[..nul])
        .map_err(|_| ObjectError::corrupt("object header is not valid UTF-8"))?;
    let (kind, size) = header
        .split_once(' ')
        .ok_or_else(|| ObjectError::corrupt(format!("malformed object header {header:?}")))?;

    let kind = ObjectType::try_from(kind)?;
    let size = parse_size(size)?;
    let payload = framed.slice(nul + 1..);

    if size != payload.len() {
        return Err(ObjectError::corrupt(format!(
            "declared size {size} does not match payload length {}",
            payload.len()
        )));
    }

    Ok(RawObject::new(kind, size, payload))
}

fn parse_size(size: &str) -> ObjectResult<usize> {
    let is_canonical = !size.is_empty()
        && size.bytes().all(|byte| byte.is_ascii_digit())
        && (size == "0" || !size.starts_with('0'));
    if !is_canonical {
        return Err(ObjectError::corrupt(format!("invalid object size {size:?}")));
    }

    size.parse()
        .map_err(|_| ObjectError::corrupt(format!("object size {size:?} out of range")))
}
