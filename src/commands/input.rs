use anyhow::{Context, Result};
use std::io::Read;

/// Resolves a TEXT argument: `-` means stdin, anything else is literal.
///
/// One trailing line break is dropped from stdin so `echo ... |` works as
/// expected.
pub fn read_text_arg(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(strip_one_newline(buf))
}

fn strip_one_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
