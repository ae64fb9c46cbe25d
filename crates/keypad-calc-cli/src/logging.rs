//! Structured logging setup
//!
//! Logs go to stderr so stdout carries only display frames. `RUST_LOG`
//! takes precedence over the level derived from `-q`/`-v`.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Builds the filter for a verbosity level, honoring `RUST_LOG` when set
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_logging(verbosity: Verbosity) -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::config(format!("failed to initialize logging: {e}")))
}
