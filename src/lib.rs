//! A minimal content-addressable object store and directory tree snapshotter.
//!
//! File contents are stored as immutable blob objects and directories as tree
//! objects that reference blobs and sub-trees by their SHA-1 IDs, using the
//! same object framing and on-disk layout as git's loose objects.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
pub mod logging;
