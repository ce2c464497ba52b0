//! Automatic peeling of nested encodings.
//!
//! The loop is a pure reducer: [`peel_layer`] looks at one value and either
//! proposes the next step or gives up. [`peel`] folds it at most
//! `max_iterations` times. Nothing here touches an [`EncodingChain`].
//!
//! [`EncodingChain`]: super::EncodingChain

use super::{EncodingStep, StepMethod};
use crate::encoding::{looks_like_base64, Base64Codec, Codec, UrlCodec};

pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// URL decoding is tried first: it is the more likely outer wrapper.
pub fn peel_layer(current: &str) -> Option<EncodingStep> {
    url_layer(current).or_else(|| base64_layer(current))
}

/// Repeatedly applies [`peel_layer`], stopping at the first value that
/// yields nothing or after `max_iterations` accepted layers.
pub fn peel(start: &str, max_iterations: usize) -> Vec<EncodingStep> {
    std::iter::successors(peel_layer(start), |prev| peel_layer(&prev.value))
        .take(max_iterations)
        .collect()
}

/// Accepted only when decoding shrinks the text.
fn url_layer(current: &str) -> Option<EncodingStep> {
    UrlCodec
        .decode(current)
        .ok()
        .filter(|decoded| decoded.len() < current.len())
        .map(|decoded| EncodingStep::new(StepMethod::UrlDecode, decoded))
}

/// Accepted only for well-formed Base64 whose payload is printable ASCII.
fn base64_layer(current: &str) -> Option<EncodingStep> {
    if !looks_like_base64(current) || current.len() % 4 != 0 {
        return None;
    }
    Base64Codec
        .decode(current)
        .ok()
        .filter(|decoded| decoded.bytes().all(is_printable_ascii))
        .map(|decoded| EncodingStep::new(StepMethod::Base64Decode, decoded))
}

fn is_printable_ascii(b: u8) -> bool {
    (0x20..=0x7e).contains(&b)
}
