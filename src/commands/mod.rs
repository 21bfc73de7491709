//! Command implementations
//!
//! Commands are organized into two categories following git's architecture:
//!
//! - `plumbing`: Low-level commands for direct object manipulation
//!   (hash-object, write-tree, cat-file, ls-tree, inspect-object)
//! - `porcelain`: User-facing commands (init)
//!
//! Every command is a method on `Repository` that writes its output to the
//! repository's writer and returns failures to the caller.

pub mod plumbing;
pub mod porcelain;
