use thiserror::Error;

use super::CodecKind;

/// Input does not conform to the expected encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{codec} decode failed: {detail}")]
    Malformed { codec: CodecKind, detail: String },

    #[error("{codec} decode failed: odd number of digits ({len})")]
    OddLength { codec: CodecKind, len: usize },

    #[error("{codec} decode failed: result is not valid UTF-8")]
    InvalidUtf8 { codec: CodecKind },
}

impl DecodeError {
    pub fn malformed(codec: CodecKind, detail: impl Into<String>) -> Self {
        Self::Malformed {
            codec,
            detail: detail.into(),
        }
    }

    /// The codec that rejected the input.
    pub fn codec(&self) -> CodecKind {
        match self {
            DecodeError::Malformed { codec, .. }
            | DecodeError::OddLength { codec, .. }
            | DecodeError::InvalidUtf8 { codec } => *codec,
        }
    }
}
