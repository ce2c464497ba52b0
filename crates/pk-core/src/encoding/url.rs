use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{Codec, CodecKind, DecodeError};

/// Everything except the URI-component unreserved set is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub struct UrlCodec;

impl UrlCodec {
    /// Every `%` must introduce exactly two hex digits.
    fn check_escapes(input: &str) -> Result<(), DecodeError> {
        let bytes = input.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' {
                let valid = bytes.len() > i + 2
                    && bytes[i + 1].is_ascii_hexdigit()
                    && bytes[i + 2].is_ascii_hexdigit();
                if !valid {
                    return Err(DecodeError::malformed(
                        CodecKind::Url,
                        format!("malformed escape sequence at offset {i}"),
                    ));
                }
                i += 3;
            } else {
                i += 1;
            }
        }
        Ok(())
    }
}

impl Codec for UrlCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Url
    }

    fn encode(&self, input: &str) -> String {
        utf8_percent_encode(input, COMPONENT).to_string()
    }

    fn decode(&self, input: &str) -> Result<String, DecodeError> {
        Self::check_escapes(input)?;
        percent_decode_str(input)
            .decode_utf8()
            .map(|decoded| decoded.into_owned())
            .map_err(|_| DecodeError::InvalidUtf8 {
                codec: CodecKind::Url,
            })
    }
}
