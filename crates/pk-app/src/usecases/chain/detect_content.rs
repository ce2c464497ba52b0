use pk_core::detect::{candidates, detect, DetectedType, SuggestedTool};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub kind: DetectedType,
    pub suggested_tool: SuggestedTool,
    /// every heuristic that matched, in precedence order
    pub candidates: Vec<DetectedType>,
}

/// Use case for classifying a piece of text and picking the tool for it.
pub struct DetectContent;

impl DetectContent {
    #[tracing::instrument(name = "usecase.detect_content.execute", skip_all, fields(len = input.len()))]
    pub fn execute(&self, input: &str) -> Detection {
        let kind = detect(input);
        let detection = Detection {
            kind,
            suggested_tool: kind.suggested_tool(),
            candidates: candidates(input),
        };
        debug!(kind = %detection.kind, candidates = detection.candidates.len(), "content classified");
        detection
    }
}
