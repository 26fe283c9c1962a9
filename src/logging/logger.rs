// file: src/logging/logger.rs
// version: 1.1.0
// guid: f6a7b8c9-d0e1-2345-6789-012345fabcde

//! Logger initialization and configuration
//!
//! Diagnostic traces go to stderr through `tracing`; the user-facing
//! `origin -> target` reporting lives in [`crate::report`] and stays on
//! stdout because its format is part of the CLI contract.

use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// `--verbose` raises the default filter to `debug`; `RUST_LOG` overrides
/// either setting.
pub fn init_logger(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| {
            crate::error::SlinkyError::config(format!("Failed to initialize logger: {}", e))
        })?;

    Ok(())
}
