use pk_core::encoding::{CodecKind, DecodeError};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// Use case for one-shot encode/decode outside of a chain.
pub struct TransformText;

impl TransformText {
    #[tracing::instrument(
        name = "usecase.transform_text.execute",
        skip(self, input),
        fields(len = input.len())
    )]
    pub fn execute(
        &self,
        codec: CodecKind,
        direction: Direction,
        input: &str,
    ) -> Result<String, DecodeError> {
        let result = match direction {
            Direction::Encode => Ok(codec.encode(input)),
            Direction::Decode => codec.decode(input),
        };
        match &result {
            Ok(out) => debug!(%codec, out_len = out.len(), "transform finished"),
            Err(e) => warn!(%codec, error = %e, "transform rejected input"),
        }
        result
    }
}
