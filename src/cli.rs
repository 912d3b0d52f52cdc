//! Command line surface for the `filepeek` binary.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use filepeek::SharedContainer;

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "filepeek",
    version,
    about = "Render a terminal preview of a file, dispatched by extension"
)]
pub struct CliArgs {
    /// File to preview.
    pub file: PathBuf,

    /// Dispatch with this type key instead of deriving it from the file name.
    #[arg(long = "type", value_name = "KEY")]
    pub type_override: Option<String>,

    /// How to emit the rendered preview.
    #[arg(long, value_enum, default_value_t = OutputFormat::Tui)]
    pub output: OutputFormat,

    /// Config file merged over the default location.
    #[arg(long, env = "FILEPEEK_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Locale for user-facing messages (e.g. en, zh-CN).
    #[arg(long)]
    pub locale: Option<String>,

    /// Extra extension routed to the text viewer (repeatable).
    #[arg(long = "text-extension", value_name = "EXT", action = ArgAction::Append)]
    pub text_extensions: Vec<String>,

    /// Print the resolved configuration before rendering.
    #[arg(long)]
    pub print_config: bool,
}

/// Output formats for a finished render.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Interactive viewer.
    Tui,
    /// Flattened text on stdout.
    Plain,
    /// JSON summary on stdout.
    Json,
}

/// Print the flattened rendered content.
pub fn print_plain(container: &SharedContainer) {
    print!("{}", container.plain_text());
}

/// Print a JSON summary of the render.
pub fn print_json(
    file: &Path,
    type_key: &str,
    recognized: bool,
    container: &SharedContainer,
) -> Result<()> {
    let summary = serde_json::json!({
        "file": file.display().to_string(),
        "type": type_key,
        "recognized": recognized,
        "title": container.with(|c| c.title().map(str::to_owned)),
        "blocks": container.block_count(),
        "content": container.plain_text(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
