use thiserror::Error;

use crate::encoding::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    #[error("invalid JWT: expected 3 dot-separated segments, found {0}")]
    JwtSegmentCount(usize),

    #[error("invalid JWT {segment}: {source}")]
    JwtSegment {
        segment: &'static str,
        #[source]
        source: DecodeError,
    },

    #[error("invalid JWT {segment}: not JSON ({detail})")]
    JwtJson { segment: &'static str, detail: String },

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("invalid regex: {0}")]
    InvalidRegex(String),

    #[error("invalid regex flag '{0}' (expected each of g, i, m, s, u at most once)")]
    InvalidRegexFlag(char),
}
