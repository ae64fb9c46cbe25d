//! keypad-calc CLI library
//!
//! Command-line front end for the `keypad-calc` state machine: press
//! buttons by label, drive it line by line from stdin, or print the keypad.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod runner;
mod session;

pub use commands::{Cli, ColorArg, Commands, FormatArg, KeypadArgs, PressArgs, ReplArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{FrameRenderer, OutputFormat};
pub use runner::{build_config, CommandRunner};
pub use session::Session;
