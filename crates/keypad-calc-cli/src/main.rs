//! keypad-calc: four-function keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc press 1 2 + 3 =          # prints 15
//! keypad-calc press --steps 9 +/-      # one frame per button
//! echo "1 + 2 =" | keypad-calc repl    # one frame per input line
//! keypad-calc keypad                   # print the button grid
//! ```

use clap::Parser;
use keypad_calc_cli::{build_config, logging, Cli, CliResult, CommandRunner, Commands};
use std::io;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    logging::init_logging(config.verbosity)?;
    debug!(?config, "configuration loaded");

    let runner = CommandRunner::new(config);
    let stdout = io::stdout().lock();
    match cli.command {
        Commands::Press(args) => runner.press(&args, stdout).map(drop),
        Commands::Repl(args) => runner.repl(&args, io::stdin().lock(), stdout).map(drop),
        Commands::Keypad(args) => runner.keypad(&args, stdout).map(drop),
    }
}
