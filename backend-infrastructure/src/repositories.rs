pub mod artifact_file;
pub mod sqlite_store;

pub use artifact_file::*;
pub use sqlite_store::*;
