use serde_json::Value;

use super::InspectError;

fn parse(input: &str) -> Result<Option<Value>, InspectError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(input)
        .map(Some)
        .map_err(|e| InspectError::InvalidJson(e.to_string()))
}

/// Pretty-prints with two-space indentation, keeping key order.
/// Blank input formats to an empty string.
pub fn format_json(input: &str) -> Result<String, InspectError> {
    let Some(value) = parse(input)? else {
        return Ok(String::new());
    };
    serde_json::to_string_pretty(&value).map_err(|e| InspectError::InvalidJson(e.to_string()))
}

pub fn minify_json(input: &str) -> Result<String, InspectError> {
    let Some(value) = parse(input)? else {
        return Ok(String::new());
    };
    serde_json::to_string(&value).map_err(|e| InspectError::InvalidJson(e.to_string()))
}
