use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{Base64Codec, Base64UrlCodec, Codec, DecodeError, HexCodec, HtmlCodec, UrlCodec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    Base64,
    Base64Url,
    Hex,
    Url,
    Html,
}

impl CodecKind {
    pub const ALL: [CodecKind; 5] = [
        CodecKind::Base64,
        CodecKind::Base64Url,
        CodecKind::Hex,
        CodecKind::Url,
        CodecKind::Html,
    ];

    pub fn codec(self) -> &'static dyn Codec {
        match self {
            CodecKind::Base64 => &Base64Codec,
            CodecKind::Base64Url => &Base64UrlCodec,
            CodecKind::Hex => &HexCodec,
            CodecKind::Url => &UrlCodec,
            CodecKind::Html => &HtmlCodec,
        }
    }

    pub fn encode(self, input: &str) -> String {
        self.codec().encode(input)
    }

    pub fn decode(self, input: &str) -> Result<String, DecodeError> {
        self.codec().decode(input)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CodecKind::Base64 => "base64",
            CodecKind::Base64Url => "base64url",
            CodecKind::Hex => "hex",
            CodecKind::Url => "url",
            CodecKind::Html => "html",
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CodecKind::Base64 => "Base64",
            CodecKind::Base64Url => "Base64URL",
            CodecKind::Hex => "Hex",
            CodecKind::Url => "URL",
            CodecKind::Html => "HTML",
        };
        f.write_str(label)
    }
}

impl FromStr for CodecKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        CodecKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| anyhow::anyhow!("unknown codec: {s}"))
    }
}
