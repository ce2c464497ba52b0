//! # pk-core
//!
//! Core domain models and encoding logic for peelkit.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! codecs, the content-type detector, the encoding chain engine and the
//! clipboard history model. I/O lives behind the traits in [`ports`].

// Public module exports
pub mod chain;
pub mod config;
pub mod detect;
pub mod encoding;
pub mod history;
pub mod ids;
pub mod inspect;
pub mod ports;

// Re-export commonly used types at the crate root
pub use chain::{AutoSolveOutcome, ChainError, EncodingChain, EncodingStep, StepMethod};
pub use config::AppConfig;
pub use detect::{detect, DetectedType, SuggestedTool};
pub use encoding::{Codec, CodecKind, DecodeError};
pub use history::{ClipHistory, ClipHistoryEntry};
pub use ids::ClipId;
