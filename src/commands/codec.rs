use anyhow::Result;
use pk_app::{Direction, TransformText};
use pk_core::CodecKind;

pub fn run(codec: CodecKind, direction: Direction, text: &str) -> Result<String> {
    Ok(TransformText.execute(codec, direction, text)?)
}
