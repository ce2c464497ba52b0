pub mod history;
pub mod kv;
pub mod time;

pub use history::KvClipHistoryRepository;
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore};
pub use time::SystemClock;
