//! Directory snapshots
//!
//! Walks a directory depth-first and records it as a hierarchy of tree
//! objects referencing blobs and sub-trees by ID. Entries are visited in
//! byte-wise name order, so the same directory state always produces the same
//! tree ID regardless of how the filesystem enumerates it.

pub mod tree_builder;
