use anyhow::{Context, Result};
use chrono::DateTime;
use pk_core::{ClipHistoryEntry, ClipId};

use crate::bootstrap::AppDeps;
use crate::cli::ClipAction;

const PREVIEW_CHARS: usize = 60;

pub async fn run(deps: &AppDeps, action: ClipAction) -> Result<String> {
    match action {
        ClipAction::Capture => {
            let captured = deps.capture_clipboard().execute().await?;
            Ok(format!(
                "captured {} as {} ({} in history)",
                captured.entry.id,
                captured.entry.kind,
                captured.history.len()
            ))
        }
        ClipAction::List { json } => {
            let entries = deps.list_history().execute().await;
            if json {
                return serde_json::to_string_pretty(&entries).context("serialize history failed");
            }
            Ok(render_entries(&entries))
        }
        ClipAction::Delete { id } => {
            let id = ClipId::from_string(id);
            deps.delete_history_entry().execute(&id).await?;
            Ok(format!("deleted {id}"))
        }
        ClipAction::Clear => {
            deps.clear_history().execute().await?;
            Ok("history cleared".to_string())
        }
    }
}

pub fn render_entries(entries: &[ClipHistoryEntry]) -> String {
    if entries.is_empty() {
        return "(history is empty)".to_string();
    }
    entries
        .iter()
        .map(|entry| {
            let when = DateTime::from_timestamp_millis(entry.timestamp)
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| entry.timestamp.to_string());
            format!(
                "{}  {when}  {:<6}  {}",
                entry.id,
                entry.kind.to_string(),
                entry.preview(PREVIEW_CHARS)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
