use thiserror::Error;

use super::StepMethod;
use crate::encoding::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("{0} is not a transformation")]
    NotATransform(StepMethod),

    #[error("step index {index} out of range (chain has {len} steps)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("a chain must start with its input step and hold no other input step")]
    MisplacedInput,
}
