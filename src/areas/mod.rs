//! Repository areas
//!
//! - `database`: the content-addressed object store under `.mygit/objects`
//! - `workspace`: the working directory being snapshotted
//! - `repository`: the explicit repository root tying both together

pub mod database;
pub mod repository;
pub mod workspace;
