use super::{utf8_or_error, Codec, CodecKind, DecodeError};

/// Lowercase, two digits per byte.
pub struct HexCodec;

impl Codec for HexCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Hex
    }

    fn encode(&self, input: &str) -> String {
        ::hex::encode(input.as_bytes())
    }

    fn decode(&self, input: &str) -> Result<String, DecodeError> {
        let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if digits.len() % 2 != 0 {
            return Err(DecodeError::OddLength {
                codec: CodecKind::Hex,
                len: digits.len(),
            });
        }

        let bytes = ::hex::decode(&digits)
            .map_err(|e| DecodeError::malformed(CodecKind::Hex, e.to_string()))?;
        utf8_or_error(CodecKind::Hex, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_lowercase_zero_padded() {
        assert_eq!(HexCodec.encode("\n A"), "0a2041");
        assert_eq!(HexCodec.encode(""), "");
    }

    #[test]
    fn decode_strips_whitespace() {
        assert_eq!(HexCodec.decode("68 65\n6c 6C\t6f").unwrap(), "hello");
    }

    #[test]
    fn decode_rejects_odd_length() {
        let err = HexCodec.decode("abc").unwrap_err();
        assert_eq!(
            err,
            DecodeError::OddLength {
                codec: CodecKind::Hex,
                len: 3
            }
        );
    }

    #[test]
    fn decode_rejects_non_hex() {
        let err = HexCodec.decode("zz").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { codec: CodecKind::Hex, .. }));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        let err = HexCodec.decode("deadbeef").unwrap_err();
        assert_eq!(err, DecodeError::InvalidUtf8 { codec: CodecKind::Hex });
    }

    #[test]
    fn multibyte_text_survives() {
        let encoded = HexCodec.encode("你好");
        assert_eq!(encoded, "e4bda0e5a5bd");
        assert_eq!(HexCodec.decode(&encoded).unwrap(), "你好");
    }
}
