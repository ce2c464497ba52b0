//! Clipboard history use cases wired to the real file-backed store.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use pk_app::{
    CaptureClipboard, ClearClipHistory, DeleteClipHistoryEntry, HistoryEntryNotFound,
    ListClipHistory,
};
use pk_core::ports::{ClipboardAccessError, ClipboardReaderPort, ClockPort};
use pk_core::{ClipId, DetectedType};
use pk_infra::{FileKeyValueStore, KvClipHistoryRepository};
use tempfile::TempDir;

mock! {
    Clipboard {}
    #[async_trait]
    impl ClipboardReaderPort for Clipboard {
        async fn read_text(&self) -> Result<String, ClipboardAccessError>;
    }
}

mock! {
    Clock {}
    impl ClockPort for Clock {
        fn now_ms(&self) -> i64;
    }
}

fn clipboard_yielding(items: &[&str]) -> MockClipboard {
    let mut clipboard = MockClipboard::new();
    let mut seq = mockall::Sequence::new();
    for item in items {
        let item = item.to_string();
        clipboard
            .expect_read_text()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || Ok(item.clone()));
    }
    clipboard
}

fn clock() -> MockClock {
    let mut clock = MockClock::new();
    clock.expect_now_ms().returning(|| 1_700_000_000_000);
    clock
}

#[tokio::test]
async fn capture_dedupe_delete_clear_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(FileKeyValueStore::new(temp_dir.path().join("store.json")));
    let repo = Arc::new(KvClipHistoryRepository::new(store));

    let capture = CaptureClipboard::new(
        Arc::new(clipboard_yielding(&["deadbeef", "{\"a\":1}", "deadbeef"])),
        repo.clone(),
        Arc::new(clock()),
        10,
    );

    capture.execute().await.unwrap();
    capture.execute().await.unwrap();
    let last = capture.execute().await.unwrap();

    let listed = ListClipHistory::new(repo.clone(), 10).execute().await;
    let contents: Vec<_> = listed.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["deadbeef", "{\"a\":1}"]);
    assert_eq!(listed[0].kind, DetectedType::Hex);
    assert_eq!(listed[1].kind, DetectedType::Json);
    assert_eq!(listed[0].id, last.entry.id);

    let delete = DeleteClipHistoryEntry::new(repo.clone(), 10);
    delete.execute(&listed[1].id).await.unwrap();
    let after_delete = ListClipHistory::new(repo.clone(), 10).execute().await;
    assert_eq!(after_delete.len(), 1);

    let missing = ClipId::from_string("no-such-entry".to_string());
    let err = delete.execute(&missing).await.unwrap_err();
    assert!(err.downcast_ref::<HistoryEntryNotFound>().is_some());

    ClearClipHistory::new(repo.clone()).execute().await.unwrap();
    assert!(ListClipHistory::new(repo, 10).execute().await.is_empty());
}

#[tokio::test]
async fn history_is_capped_at_capacity() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(FileKeyValueStore::new(temp_dir.path().join("store.json")));
    let repo = Arc::new(KvClipHistoryRepository::new(store));

    let items: Vec<String> = (0..5).map(|i| format!("item {i}")).collect();
    let refs: Vec<&str> = items.iter().map(String::as_str).collect();
    let capture = CaptureClipboard::new(
        Arc::new(clipboard_yielding(&refs)),
        repo.clone(),
        Arc::new(clock()),
        3,
    );

    for _ in 0..5 {
        capture.execute().await.unwrap();
    }

    let listed = ListClipHistory::new(repo, 3).execute().await;
    let contents: Vec<_> = listed.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["item 4", "item 3", "item 2"]);
}

#[tokio::test]
async fn corrupt_store_lists_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");
    std::fs::write(&path, r#"{"clipboard-history":"not an array"}"#).unwrap();
    let repo = Arc::new(KvClipHistoryRepository::new(Arc::new(
        FileKeyValueStore::new(&path),
    )));

    assert!(ListClipHistory::new(repo, 10).execute().await.is_empty());
}

#[tokio::test]
async fn capture_over_garbage_store_starts_fresh_history() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");
    std::fs::write(&path, "not json at all").unwrap();
    let repo = Arc::new(KvClipHistoryRepository::new(Arc::new(
        FileKeyValueStore::new(&path),
    )));

    let capture = CaptureClipboard::new(
        Arc::new(clipboard_yielding(&["deadbeef"])),
        repo.clone(),
        Arc::new(clock()),
        10,
    );
    let captured = capture.execute().await.unwrap();
    assert_eq!(captured.history.len(), 1);

    let listed = ListClipHistory::new(repo, 10).execute().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].content, "deadbeef");
}

#[tokio::test]
async fn clear_over_garbage_store_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");
    std::fs::write(&path, "not json at all").unwrap();
    let repo = Arc::new(KvClipHistoryRepository::new(Arc::new(
        FileKeyValueStore::new(&path),
    )));

    ClearClipHistory::new(repo.clone()).execute().await.unwrap();

    assert!(ListClipHistory::new(repo, 10).execute().await.is_empty());
    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(on_disk.is_object());
}

#[tokio::test]
async fn empty_clipboard_is_not_recorded() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(FileKeyValueStore::new(temp_dir.path().join("store.json")));
    let repo = Arc::new(KvClipHistoryRepository::new(store));

    let mut clipboard = MockClipboard::new();
    clipboard
        .expect_read_text()
        .returning(|| Err(ClipboardAccessError::Empty));
    let capture = CaptureClipboard::new(Arc::new(clipboard), repo.clone(), Arc::new(clock()), 10);

    assert!(capture.execute().await.is_err());
    assert!(ListClipHistory::new(repo, 10).execute().await.is_empty());
}
