//! Command execution

use keypad_calc::prelude::*;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::commands::{Cli, FormatArg, KeypadArgs, PressArgs, ReplArgs};
use crate::config::{CliConfig, Verbosity};
use crate::error::{CliError, CliResult};
use crate::output::FrameRenderer;
use crate::session::Session;

/// Builds the effective configuration: YAML file first, then flags
pub fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::from_yaml_file(path)?,
        None => CliConfig::new(),
    };

    if cli.quiet || cli.verbose > 0 {
        config = config.with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose));
    }
    if let Some(color) = cli.color {
        config = config.with_color(color.into());
    }
    if let Some(separator) = cli.separator {
        if separator.is_ascii_digit() {
            return Err(CliError::invalid_argument(format!(
                "separator cannot be a digit: {separator:?}"
            )));
        }
        config = config.with_separator(separator);
    }
    if let Some(width) = cli.width {
        config = config.with_width(width);
    }
    Ok(config)
}

/// Runs subcommands against a configuration
#[derive(Debug, Clone)]
pub struct CommandRunner {
    config: CliConfig,
}

impl CommandRunner {
    /// Create a runner
    #[must_use]
    pub const fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Effective configuration
    #[must_use]
    pub const fn config(&self) -> &CliConfig {
        &self.config
    }

    fn renderer(&self, format: Option<FormatArg>) -> FrameRenderer {
        let format = format.map_or(self.config.format, Into::into);
        FrameRenderer::new(format, self.config.color.should_color()).with_width(self.config.width)
    }

    fn session<W: Write>(&self, format: Option<FormatArg>, out: W) -> Session<W> {
        Session::new(self.config.display, self.renderer(format), out)
    }

    /// Presses every label, then prints the final frame
    ///
    /// With `--steps` a frame is printed after each label instead.
    pub fn press<W: Write>(&self, args: &PressArgs, out: W) -> CliResult<W> {
        info!(count = args.labels.len(), steps = args.steps, "pressing labels");
        let mut session = self.session(args.format, out).with_echo(args.steps);
        for label in &args.labels {
            warn_if_unknown(label);
            session.press(label);
        }
        if !args.steps {
            session.write_frame()?;
        }
        session.finish()
    }

    /// Reads labels line by line until EOF, printing a frame per line
    pub fn repl<R: BufRead, W: Write>(&self, args: &ReplArgs, input: R, out: W) -> CliResult<W> {
        info!("reading labels from input");
        let mut session = self.session(args.format, out);
        let mut lines = 0usize;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            for label in line.split_whitespace() {
                warn_if_unknown(label);
                session.press(label);
            }
            session.write_frame()?;
            lines += 1;
        }
        debug!(lines, "input exhausted");
        session.finish()
    }

    /// Prints the keypad layout
    pub fn keypad<W: Write>(&self, args: &KeypadArgs, mut out: W) -> CliResult<W> {
        let rendered = self.renderer(args.format).render_keypad(&Keypad::new())?;
        writeln!(out, "{rendered}")?;
        out.flush()?;
        Ok(out)
    }
}

fn warn_if_unknown(label: &str) {
    if let Err(err) = Input::from_label(label) {
        warn!("{err}; ignored");
    }
}
