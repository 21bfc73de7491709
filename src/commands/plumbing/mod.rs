//! Plumbing commands (low-level object operations)
//!
//! ## Commands
//!
//! - `hash-object`: Compute a blob ID and optionally store it
//! - `write-tree`: Snapshot the repository root into tree objects
//! - `cat-file`: Print an object's content, type or size
//! - `ls-tree`: List the entries of a tree object
//! - `inspect-object`: Print an object's header and decoded payload

pub mod cat_file;
pub mod hash_object;
pub mod inspect_object;
pub mod ls_tree;
pub mod write_tree;
