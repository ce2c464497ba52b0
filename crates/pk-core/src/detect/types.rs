use serde::{Deserialize, Serialize};
use std::fmt;

/// Best-effort classification of a piece of text.
///
/// Serialized labels match the ones written into persisted clipboard history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectedType {
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "JWT")]
    Jwt,
    #[serde(rename = "URL")]
    Url,
    #[serde(rename = "Base64")]
    Base64,
    #[serde(rename = "Hex")]
    Hex,
    #[serde(rename = "Text")]
    PlainText,
}

impl DetectedType {
    pub fn as_str(self) -> &'static str {
        match self {
            DetectedType::Json => "JSON",
            DetectedType::Jwt => "JWT",
            DetectedType::Url => "URL",
            DetectedType::Base64 => "Base64",
            DetectedType::Hex => "Hex",
            DetectedType::PlainText => "Text",
        }
    }

    /// The tool this kind of content is routed to.
    pub fn suggested_tool(self) -> SuggestedTool {
        match self {
            DetectedType::Json => SuggestedTool::JsonFormatter,
            DetectedType::Jwt => SuggestedTool::JwtDecoder,
            DetectedType::Base64 | DetectedType::PlainText => SuggestedTool::Base64,
            DetectedType::Hex | DetectedType::Url => SuggestedTool::EncodingChain,
        }
    }
}

impl fmt::Display for DetectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedTool {
    JsonFormatter,
    JwtDecoder,
    Base64,
    EncodingChain,
}

impl fmt::Display for SuggestedTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SuggestedTool::JsonFormatter => "JSON formatter",
            SuggestedTool::JwtDecoder => "JWT decoder",
            SuggestedTool::Base64 => "Base64 encoder/decoder",
            SuggestedTool::EncodingChain => "encoding chain analyzer",
        };
        f.write_str(label)
    }
}
