use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::encoding::CodecKind;

/// How a step's value was produced from the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMethod {
    /// Raw user input; only ever the first step.
    Input,
    Base64Decode,
    Base64UrlDecode,
    HexDecode,
    UrlDecode,
    HtmlDecode,
}

impl StepMethod {
    pub fn decoding(codec: CodecKind) -> Self {
        match codec {
            CodecKind::Base64 => StepMethod::Base64Decode,
            CodecKind::Base64Url => StepMethod::Base64UrlDecode,
            CodecKind::Hex => StepMethod::HexDecode,
            CodecKind::Url => StepMethod::UrlDecode,
            CodecKind::Html => StepMethod::HtmlDecode,
        }
    }

    /// The codec this step decodes with, `None` for [`StepMethod::Input`].
    pub fn codec(self) -> Option<CodecKind> {
        match self {
            StepMethod::Input => None,
            StepMethod::Base64Decode => Some(CodecKind::Base64),
            StepMethod::Base64UrlDecode => Some(CodecKind::Base64Url),
            StepMethod::HexDecode => Some(CodecKind::Hex),
            StepMethod::UrlDecode => Some(CodecKind::Url),
            StepMethod::HtmlDecode => Some(CodecKind::Html),
        }
    }
}

impl fmt::Display for StepMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.codec() {
            Some(codec) => write!(f, "{codec} Decode"),
            None => f.write_str("Input"),
        }
    }
}

/// Accepts codec names (`base64`, `hex`, ...) as shorthand for their decode step.
impl FromStr for StepMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("input") {
            return Ok(StepMethod::Input);
        }
        let codec_name = s
            .trim()
            .trim_end_matches("-decode")
            .trim_end_matches("_decode");
        codec_name.parse::<CodecKind>().map(StepMethod::decoding)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingStep {
    pub method: StepMethod,
    pub value: String,
}

impl EncodingStep {
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            method: StepMethod::Input,
            value: value.into(),
        }
    }

    pub fn new(method: StepMethod, value: impl Into<String>) -> Self {
        Self {
            method,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(StepMethod::Input.to_string(), "Input");
        assert_eq!(StepMethod::Base64Decode.to_string(), "Base64 Decode");
        assert_eq!(StepMethod::UrlDecode.to_string(), "URL Decode");
        assert_eq!(StepMethod::Base64UrlDecode.to_string(), "Base64URL Decode");
    }

    #[test]
    fn parses_codec_shorthand() {
        assert_eq!("base64".parse::<StepMethod>().unwrap(), StepMethod::Base64Decode);
        assert_eq!("url-decode".parse::<StepMethod>().unwrap(), StepMethod::UrlDecode);
        assert_eq!("HTML".parse::<StepMethod>().unwrap(), StepMethod::HtmlDecode);
        assert_eq!("input".parse::<StepMethod>().unwrap(), StepMethod::Input);
        assert!("rot13".parse::<StepMethod>().is_err());
    }

    #[test]
    fn decoding_and_codec_agree() {
        for codec in CodecKind::ALL {
            assert_eq!(StepMethod::decoding(codec).codec(), Some(codec));
        }
    }
}
