use anyhow::{Context, Result};
use pk_app::DetectContent;

pub fn run(text: &str, json: bool) -> Result<String> {
    let detection = DetectContent.execute(text);

    if json {
        return serde_json::to_string_pretty(&detection).context("serialize detection failed");
    }

    let candidates: Vec<String> = detection.candidates.iter().map(|k| k.to_string()).collect();
    Ok(format!(
        "type: {}\ntool: {}\nmatches: {}",
        detection.kind,
        detection.suggested_tool,
        candidates.join(", ")
    ))
}
