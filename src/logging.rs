//! Log subscriber set-up for the binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the entry point.

use anyhow::{Context, Result};
use tracing::Level;

use crate::config::LoggingConfig;

/// Resolve the effective level: `verbose` forces at least DEBUG.
pub fn effective_level(config: &LoggingConfig, verbose: bool) -> Result<Level> {
    let level = config
        .level
        .parse::<Level>()
        .with_context(|| format!("logging.level '{}' is not a valid level", config.level))?;

    // Level orders TRACE > DEBUG > INFO > WARN > ERROR in verbosity
    if verbose && level < Level::DEBUG {
        Ok(Level::DEBUG)
    } else {
        Ok(level)
    }
}

/// Install the global fmt subscriber writing to stderr.
///
/// Stdout is reserved for command output so `--json` stays parseable.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let level = effective_level(config, verbose)?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
