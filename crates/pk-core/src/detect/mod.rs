//! Content-type detection for opaque clipboard text.
//!
//! Detection is a best-effort guess used to route text toward a tool. It is
//! an ordered rule table evaluated top to bottom; the first rule that matches
//! wins. Order is the tie-break policy, see [`RULES`].

mod rules;
mod types;

pub use rules::{DetectionRule, RULES};
pub use types::{DetectedType, SuggestedTool};

/// Classifies `input`. Pure and bounded: every rule is a linear scan or a
/// linear-time regex.
pub fn detect(input: &str) -> DetectedType {
    RULES
        .iter()
        .find(|rule| rule.matches(input))
        .map(|rule| rule.label)
        .unwrap_or(DetectedType::PlainText)
}

/// Every label whose rule accepts `input`, in precedence order.
///
/// Useful when a string satisfies several weak heuristics at once.
pub fn candidates(input: &str) -> Vec<DetectedType> {
    RULES
        .iter()
        .filter(|rule| rule.matches(input))
        .map(|rule| rule.label)
        .collect()
}
