use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

use super::DetectedType;
use crate::encoding::looks_like_base64;

static JWT_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$").expect("static regex")
});

const MIN_HEX_LEN: usize = 5;
const MIN_BASE64_LEN: usize = 11;

/// A single predicate → label pair.
pub struct DetectionRule {
    pub label: DetectedType,
    predicate: fn(&str) -> bool,
}

impl DetectionRule {
    pub fn matches(&self, input: &str) -> bool {
        (self.predicate)(input)
    }
}

/// Precedence order. Hex sits above Base64 so all-hex strings never read as Base64.
pub static RULES: &[DetectionRule] = &[
    DetectionRule {
        label: DetectedType::PlainText,
        predicate: is_blank,
    },
    DetectionRule {
        label: DetectedType::Json,
        predicate: is_json_container,
    },
    DetectionRule {
        label: DetectedType::Jwt,
        predicate: is_jwt_shaped,
    },
    DetectionRule {
        label: DetectedType::Url,
        predicate: is_absolute_url,
    },
    DetectionRule {
        label: DetectedType::Hex,
        predicate: is_hex,
    },
    DetectionRule {
        label: DetectedType::Base64,
        predicate: is_round_trip_base64,
    },
];

fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

fn is_json_container(input: &str) -> bool {
    let trimmed = input.trim();
    (trimmed.starts_with('{') || trimmed.starts_with('['))
        && serde_json::from_str::<serde_json::Value>(input).is_ok()
}

fn is_jwt_shaped(input: &str) -> bool {
    JWT_SHAPE.is_match(input)
}

fn is_absolute_url(input: &str) -> bool {
    ::url::Url::parse(input)
        .map(|url| url.has_host())
        .unwrap_or(false)
}

fn is_hex(input: &str) -> bool {
    input.len() >= MIN_HEX_LEN && input.bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_round_trip_base64(input: &str) -> bool {
    if input.len() < MIN_BASE64_LEN || !looks_like_base64(input) {
        return false;
    }
    STANDARD
        .decode(input)
        .map(|bytes| STANDARD.encode(bytes) == input)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_order_is_fixed() {
        let labels: Vec<_> = RULES.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                DetectedType::PlainText,
                DetectedType::Json,
                DetectedType::Jwt,
                DetectedType::Url,
                DetectedType::Hex,
                DetectedType::Base64,
            ]
        );
    }

    #[test]
    fn hex_length_boundary() {
        assert!(!is_hex("abcd"));
        assert!(is_hex("abcde"));
        assert!(!is_hex("abcdg"));
    }

    #[test]
    fn base64_length_boundary() {
        // 8 chars, valid and canonical, but too short
        assert!(!is_round_trip_base64("aGVsbG8="));
        assert!(is_round_trip_base64("aGVsbG8gd29ybGQ="));
    }

    #[test]
    fn base64_rejects_non_canonical_tail() {
        // last char carries stray low bits
        assert!(!is_round_trip_base64("aGVsbG8gd29ybGR="));
    }
}
