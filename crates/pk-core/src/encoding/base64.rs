use ::base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use ::base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{utf8_or_error, Codec, CodecKind, DecodeError};

static BASE64_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+/]+={0,2}$").expect("static regex"));

/// Standard-alphabet charset with at most two trailing pads.
///
/// Shape only: says nothing about length or whether the payload decodes.
pub fn looks_like_base64(input: &str) -> bool {
    BASE64_SHAPE.is_match(input)
}

fn strip_ascii_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

pub struct Base64Codec;

impl Codec for Base64Codec {
    fn kind(&self) -> CodecKind {
        CodecKind::Base64
    }

    fn encode(&self, input: &str) -> String {
        STANDARD.encode(input.as_bytes())
    }

    fn decode(&self, input: &str) -> Result<String, DecodeError> {
        let compact = strip_ascii_whitespace(input);
        let bytes = STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| DecodeError::malformed(CodecKind::Base64, e.to_string()))?;
        utf8_or_error(CodecKind::Base64, bytes)
    }
}

/// URL-safe alphabet, unpadded on encode.
pub struct Base64UrlCodec;

impl Base64UrlCodec {
    /// Maps the URL-safe alphabet back onto the standard one and restores padding.
    ///
    /// Standard-alphabet `+` and `/` are not part of the URL-safe set and are rejected.
    fn to_standard(input: &str) -> Result<String, DecodeError> {
        let compact = strip_ascii_whitespace(input);
        if let Some(pos) = compact.find(['+', '/']) {
            return Err(DecodeError::malformed(
                CodecKind::Base64Url,
                format!("character outside the URL-safe alphabet at offset {pos}"),
            ));
        }
        let mut standard: String = compact
            .trim_end_matches('=')
            .chars()
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                other => other,
            })
            .collect();
        while standard.len() % 4 != 0 {
            standard.push('=');
        }
        Ok(standard)
    }
}

impl Codec for Base64UrlCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Base64Url
    }

    fn encode(&self, input: &str) -> String {
        URL_SAFE_NO_PAD.encode(input.as_bytes())
    }

    fn decode(&self, input: &str) -> Result<String, DecodeError> {
        let standard = Self::to_standard(input)?;
        let bytes = STANDARD
            .decode(standard.as_bytes())
            .map_err(|e| DecodeError::malformed(CodecKind::Base64Url, e.to_string()))?;
        utf8_or_error(CodecKind::Base64Url, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_hello_world() {
        assert_eq!(Base64Codec.encode("hello world"), "aGVsbG8gd29ybGQ=");
        assert_eq!(Base64Codec.decode("aGVsbG8gd29ybGQ=").unwrap(), "hello world");
    }

    #[test]
    fn decode_ignores_line_breaks() {
        assert_eq!(
            Base64Codec.decode("aGVsbG8g\nd29ybGQ=").unwrap(),
            "hello world"
        );
    }

    #[test]
    fn rejects_foreign_characters() {
        let err = Base64Codec.decode("not-valid-base64!!").unwrap_err();
        assert_eq!(err.codec(), CodecKind::Base64);
        assert!(matches!(err, DecodeError::Malformed { .. }));
    }

    #[test]
    fn rejects_bad_padding() {
        assert!(Base64Codec.decode("aGVsbG8=gd29y").is_err());
        assert!(Base64Codec.decode("aGVsbG8gd29ybGQ").is_err());
    }

    #[test]
    fn url_safe_decoder_rejects_standard_alphabet() {
        // "??>" is "Pz8+" in the standard alphabet and "Pz8-" in the URL-safe one
        assert_eq!(Base64UrlCodec.decode("Pz8-").unwrap(), "??>");
        let err = Base64UrlCodec.decode("Pz8+").unwrap_err();
        assert_eq!(err.codec(), CodecKind::Base64Url);
        assert!(Base64UrlCodec.decode("Pz8/").is_err());
    }

    #[test]
    fn rejects_non_utf8_payload() {
        // 0xff 0xfe
        let err = Base64Codec.decode("//4=").unwrap_err();
        assert_eq!(err, DecodeError::InvalidUtf8 { codec: CodecKind::Base64 });
    }

    #[test]
    fn url_variant_uses_safe_alphabet_without_padding() {
        // "??>" encodes to "Pz8+" in the standard alphabet
        assert_eq!(Base64UrlCodec.encode("??>"), "Pz8-");
        assert_eq!(Base64UrlCodec.encode("hello world"), "aGVsbG8gd29ybGQ");
        assert_eq!(Base64UrlCodec.decode("Pz8-").unwrap(), "??>");
        assert_eq!(Base64UrlCodec.decode("aGVsbG8gd29ybGQ").unwrap(), "hello world");
    }

    #[test]
    fn url_variant_accepts_existing_padding() {
        assert_eq!(Base64UrlCodec.decode("aGVsbG8gd29ybGQ=").unwrap(), "hello world");
    }

    #[test]
    fn url_variant_rejects_impossible_length() {
        assert!(Base64UrlCodec.decode("abcde").is_err());
        assert!(Base64UrlCodec.decode("ab$d").is_err());
    }

    #[test]
    fn shape_check() {
        assert!(looks_like_base64("aGVsbG8gd29ybGQ="));
        assert!(looks_like_base64("abcd"));
        assert!(!looks_like_base64(""));
        assert!(!looks_like_base64("abc==="));
        assert!(!looks_like_base64("ab cd"));
        assert!(!looks_like_base64("a-b_"));
    }
}
