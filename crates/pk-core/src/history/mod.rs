//! Clipboard history model.
//!
//! History is a short, newest-first list of distinct clipboard captures.
//! Identity for de-duplication is the exact content string; re-capturing
//! content that is already present moves it to the front with a fresh
//! entry instead of adding a second copy.

mod entry;

pub use entry::ClipHistoryEntry;

use crate::ids::ClipId;

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipHistory {
    entries: Vec<ClipHistoryEntry>,
    capacity: usize,
}

impl Default for ClipHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ClipHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Rebuilds history from stored entries (assumed newest first).
    ///
    /// Later duplicates and anything past `capacity` are dropped, so a
    /// hand-edited or older store still satisfies the invariants.
    pub fn from_entries(entries: Vec<ClipHistoryEntry>, capacity: usize) -> Self {
        let mut history = Self::with_capacity(capacity);
        for entry in entries {
            if history.entries.len() == capacity {
                break;
            }
            if !history.contains_content(&entry.content) {
                history.entries.push(entry);
            }
        }
        history
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> &[ClipHistoryEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ClipHistoryEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &ClipId) -> Option<&ClipHistoryEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn contains_content(&self, content: &str) -> bool {
        self.entries.iter().any(|e| e.content == content)
    }

    /// Puts `entry` at the front, collapsing any older entry with the same
    /// content and evicting the oldest beyond capacity.
    pub fn record(&mut self, entry: ClipHistoryEntry) {
        self.entries.retain(|e| e.content != entry.content);
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
    }

    pub fn remove(&mut self, id: &ClipId) -> Option<ClipHistoryEntry> {
        let index = self.entries.iter().position(|e| &e.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
