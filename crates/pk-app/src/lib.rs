//! peelkit application orchestration layer
//!
//! This crate contains the use cases that sit between the CLI and the
//! core domain: clipboard capture and history management, and the
//! interactive encoding chain session.

pub mod usecases;

pub use usecases::chain::{ChainSession, DetectContent, Detection, Direction, TransformText};
pub use usecases::clipboard::{
    CaptureClipboard, CapturedClip, ClearClipHistory, DeleteClipHistoryEntry,
    HistoryEntryNotFound, ListClipHistory,
};
