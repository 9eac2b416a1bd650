//! Command-line arguments and the run configuration built from them.

use clap::Parser;
use std::path::PathBuf;
use wireframe_core::{SessionConfig, UiMessage};

/// Convert a scene document into a themed wireframe.
#[derive(Parser, Debug, Clone)]
#[command(name = "wireframe", version, about)]
pub struct CliArgs {
    /// Scene document (JSON) to convert
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Theme: mono, blueprint or dark-mode
    #[arg(long, env = "WIREFRAME_THEME")]
    pub theme: Option<String>,

    /// Font: handwritten, sans-serif or serif
    #[arg(long, env = "WIREFRAME_FONT")]
    pub font: Option<String>,

    /// Keep corners square instead of rounding them
    #[arg(long)]
    pub sharp_corners: bool,

    /// Names of the nodes to convert (defaults to every top-level node)
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub select: Vec<String>,

    /// Print the converted document after the UI messages
    #[arg(long)]
    pub print: bool,

    /// Write the converted document to a file
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Horizontal gap between an original and its clone
    #[arg(long, default_value_t = 100.0, env = "WIREFRAME_CLONE_OFFSET")]
    pub clone_offset: f64,
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub input: PathBuf,
    pub request: UiMessage,
    pub select: Vec<String>,
    pub print: bool,
    pub output: Option<PathBuf>,
    pub session: SessionConfig,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            input: args.input,
            request: UiMessage::Convert {
                font_choice: args.font,
                theme_choice: args.theme,
                use_rounded_corners: Some(!args.sharp_corners),
            },
            select: args.select,
            print: args.print,
            output: args.output,
            session: SessionConfig {
                clone_offset: args.clone_offset,
                ..SessionConfig::default()
            },
        }
    }
}
