//! Object types and operations
//!
//! All content is stored as objects identified by SHA-1 hashes. There are two
//! kinds:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (names, modes, and object IDs)
//!
//! Both are framed as `<type> <size>\0<content>` before hashing and storage.

pub mod blob;
pub mod codec;
pub mod entry_mode;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in raw bytes, as stored in tree entries
pub const RAW_OBJECT_ID_LENGTH: usize = OBJECT_ID_LENGTH / 2;
