//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ColorChoice;
use crate::output::OutputFormat;

/// keypad-calc: a four-function keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only in the log)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<ColorArg>,

    /// Thousands separator for the display
    #[arg(long, global = true)]
    pub separator: Option<char>,

    /// Right-align display lines to this width
    #[arg(long, global = true)]
    pub width: Option<usize>,

    /// YAML configuration file
    #[arg(long, global = true, env = "KEYPAD_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press buttons by label and print the display
    Press(PressArgs),

    /// Read button labels from stdin, one frame per line
    Repl(ReplArgs),

    /// Print the keypad layout
    Keypad(KeypadArgs),
}

/// Arguments for the press command
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Button labels, e.g. `1 2 + 3 =`
    #[arg(required = true, allow_hyphen_values = true)]
    pub labels: Vec<String>,

    /// Print a frame after every label
    #[arg(long)]
    pub steps: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Arguments for the repl command
#[derive(Args, Debug)]
pub struct ReplArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Arguments for the keypad command
#[derive(Args, Debug)]
pub struct KeypadArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Output format argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain text
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
