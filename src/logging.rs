use std::io::stderr;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{error::RosterError, Result};

/// Sets up logging for the process.
///
/// Logs go to stderr so stdout stays free for command output. `RUST_LOG`
/// is honoured; otherwise the crate logs at `info`, or `debug` with
/// `--verbose`.
pub fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nhl_roster={level}")));

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init()
        .map_err(|e| RosterError::Io(std::io::Error::other(e.to_string())))
}
