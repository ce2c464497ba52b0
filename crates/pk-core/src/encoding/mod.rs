//! Text codecs used by the encoding chain and the detector.
//!
//! Every codec works on Rust `String`s: encoders take UTF-8 text, decoders
//! must produce valid UTF-8 or fail with [`DecodeError::InvalidUtf8`].
//! Arbitrary binary payloads are out of reach by construction.

mod base64;
mod error;
mod hex;
mod html;
mod kind;
mod url;

pub use self::base64::{looks_like_base64, Base64Codec, Base64UrlCodec};
pub use self::error::DecodeError;
pub use self::hex::HexCodec;
pub use self::html::HtmlCodec;
pub use self::kind::CodecKind;
pub use self::url::UrlCodec;

/// A reversible text transformation.
pub trait Codec: Send + Sync {
    fn kind(&self) -> CodecKind;

    fn encode(&self, input: &str) -> String;

    fn decode(&self, input: &str) -> Result<String, DecodeError>;
}

pub(crate) fn utf8_or_error(codec: CodecKind, bytes: Vec<u8>) -> Result<String, DecodeError> {
    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 { codec })
}
