use serde::{Deserialize, Serialize};

use crate::detect::{detect, DetectedType};
use crate::ids::ClipId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipHistoryEntry {
    pub id: ClipId,

    /// raw clipboard text
    pub content: String,

    /// classification at capture time
    #[serde(rename = "type")]
    pub kind: DetectedType,

    /// unix epoch millis
    pub timestamp: i64,
}

impl ClipHistoryEntry {
    pub fn new(content: impl Into<String>, kind: DetectedType, timestamp: i64) -> Self {
        Self {
            id: ClipId::new(),
            content: content.into(),
            kind,
            timestamp,
        }
    }

    /// Builds an entry, classifying `content` with [`detect`].
    pub fn capture(content: impl Into<String>, timestamp: i64) -> Self {
        let content = content.into();
        let kind = detect(&content);
        Self::new(content, kind, timestamp)
    }

    /// Single-line, length-capped rendering for listings.
    pub fn preview(&self, max_chars: usize) -> String {
        let flat: String = self
            .content
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        if flat.chars().count() <= max_chars {
            return flat;
        }
        let mut cut: String = flat.chars().take(max_chars).collect();
        cut.push('…');
        cut
    }
}
