pub mod objects;
pub mod snapshot;
