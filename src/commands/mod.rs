//! Command handlers. Each returns the text to print on stdout.

pub mod chain;
pub mod clip;
pub mod codec;
pub mod detect;
pub mod input;
pub mod inspect;

use anyhow::Result;
use pk_app::Direction;
use pk_core::config::AppConfig;

use crate::cli::{Command, JsonAction};
use input::read_text_arg;

/// Dispatches the commands that need no storage or clipboard access.
pub fn run_pure(command: Command, config: &AppConfig) -> Result<String> {
    match command {
        Command::Detect { text, json } => detect::run(&read_text_arg(&text)?, json),
        Command::Encode { codec, text } => {
            codec::run(codec, Direction::Encode, &read_text_arg(&text)?)
        }
        Command::Decode { codec, text } => {
            codec::run(codec, Direction::Decode, &read_text_arg(&text)?)
        }
        Command::Chain { text, steps, auto } => chain::run(
            &read_text_arg(&text)?,
            &steps,
            auto,
            config.auto_solve_max_iterations,
        ),
        Command::Jwt { token } => inspect::jwt(&read_text_arg(&token)?),
        Command::Regex {
            pattern,
            text,
            flags,
            json,
        } => inspect::regex(&pattern, &flags, &read_text_arg(&text)?, json),
        Command::Json { action } => match action {
            JsonAction::Format { text } => inspect::json_format(&read_text_arg(&text)?),
            JsonAction::Minify { text } => inspect::json_minify(&read_text_arg(&text)?),
        },
        Command::Clip { .. } => anyhow::bail!("clip commands need wired dependencies"),
    }
}
