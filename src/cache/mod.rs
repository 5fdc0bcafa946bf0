// Cache module for local launch storage.
// Provides the file-backed and in-memory launch stores.

pub mod file;
pub mod memory;
pub mod paths;
pub mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{CachedData, read_cached, write_cached};
