use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pk_core::{CodecKind, StepMethod};

/// Detect and peel nested text encodings.
///
/// Any TEXT argument given as `-` is read from stdin.
#[derive(Debug, Parser)]
#[command(name = "peelkit", version, about)]
pub struct Cli {
    /// Config file (defaults to the per-user config.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify text and name the tool to open it with
    Detect {
        text: String,
        /// Print the detection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encode text with one codec
    Encode {
        #[arg(long, short)]
        codec: CodecKind,
        text: String,
    },

    /// Decode text with one codec
    Decode {
        #[arg(long, short)]
        codec: CodecKind,
        text: String,
    },

    /// Build an encoding chain and print every step
    Chain {
        text: String,
        /// Decode step to append, in order (base64, base64url, hex, url, html)
        #[arg(long = "step", short, value_name = "METHOD")]
        steps: Vec<StepMethod>,
        /// Peel remaining URL/Base64 layers after the explicit steps
        #[arg(long)]
        auto: bool,
    },

    /// Show the header and payload of a JSON Web Token
    Jwt { token: String },

    /// Test a regular expression and list matches with their byte offsets
    Regex {
        #[arg(allow_hyphen_values = true)]
        pattern: String,
        text: String,
        /// Flag letters: g (all matches), i, m, s
        #[arg(long, short, default_value = "gm")]
        flags: String,
        /// Print the matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pretty-print or minify JSON
    Json {
        #[command(subcommand)]
        action: JsonAction,
    },

    /// Clipboard capture and history
    Clip {
        #[command(subcommand)]
        action: ClipAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum JsonAction {
    Format { text: String },
    Minify { text: String },
}

#[derive(Debug, Subcommand)]
pub enum ClipAction {
    /// Read the system clipboard into history
    Capture,
    /// List history, newest first
    List {
        /// Print full entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove one entry by id
    Delete { id: String },
    /// Remove every entry
    Clear,
}
