//! Key-value store adapters.
//!
//! The file store keeps every key in a single JSON object on disk; the
//! in-memory store backs tests.

mod file_store;
mod memory;

pub use file_store::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
