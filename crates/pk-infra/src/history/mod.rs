mod kv_repository;

pub use kv_repository::{KvClipHistoryRepository, CLIPBOARD_HISTORY_KEY};
