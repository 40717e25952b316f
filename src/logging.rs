//! Diagnostic logging.
//!
//! Console reports are plain stdout output. Everything here is diagnostics on
//! stderr through `tracing`, filtered by `MANDA_LOG` (an `EnvFilter` directive)
//! or, when unset, by the `-v` count given on the command line.

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

/// Environment variable holding an explicit filter directive.
pub const LOG_ENV_VAR: &str = "MANDA_LOG";

/// Map the `-v` count to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Build the filter, preferring `MANDA_LOG` when it is set and parses.
fn build_filter(verbosity: u8) -> EnvFilter {
    match std::env::var(LOG_ENV_VAR) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(&directive)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity))),
        _ => EnvFilter::new(default_directive(verbosity)),
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbosity: u8) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = Registry::default()
        .with(build_filter(verbosity))
        .with(layer)
        .try_init();
}
