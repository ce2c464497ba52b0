use anyhow::{Context, Result};
use chrono::Utc;
use pk_core::inspect::{decode_jwt, format_json, minify_json, test_regex, MAX_MATCHES};

pub fn jwt(token: &str) -> Result<String> {
    let decoded = decode_jwt(token)?;

    let header = serde_json::to_string_pretty(&decoded.header).context("render JWT header")?;
    let payload = serde_json::to_string_pretty(&decoded.payload).context("render JWT payload")?;

    let mut out = format!("header:\n{header}\npayload:\n{payload}");
    if let Some(exp) = decoded.expires_at() {
        let state = if decoded.is_expired_at(Utc::now()) == Some(true) {
            "expired"
        } else {
            "not expired"
        };
        out.push_str(&format!("\nexpires: {} ({state})", exp.to_rfc3339()));
    }
    Ok(out)
}

pub fn json_format(text: &str) -> Result<String> {
    Ok(format_json(text)?)
}

pub fn json_minify(text: &str) -> Result<String> {
    Ok(minify_json(text)?)
}

pub fn regex(pattern: &str, flags: &str, text: &str, json: bool) -> Result<String> {
    let found = test_regex(pattern, flags, text)?;
    if json {
        return serde_json::to_string_pretty(&found).context("render regex matches");
    }

    let mut out = match found.len() {
        0 => return Ok("no matches".to_string()),
        1 => "1 match".to_string(),
        n if n == MAX_MATCHES => format!("{n} matches (limit reached)"),
        n => format!("{n} matches"),
    };
    for (i, m) in found.iter().enumerate() {
        out.push_str(&format!("\n[{i}] {}..{} {:?}", m.start, m.end, m.text));
        for (g, group) in m.groups.iter().enumerate() {
            match group {
                Some(value) => out.push_str(&format!("\n    ${}: {value:?}", g + 1)),
                None => out.push_str(&format!("\n    ${}: (none)", g + 1)),
            }
        }
    }
    Ok(out)
}
