//! Tracing setup for the binary.
//!
//! Logs go to stderr so they never mix with the menu on stdout. `RUST_LOG`
//! takes precedence; otherwise the level is `warn`, or `debug` when verbose.

use tracing_subscriber::EnvFilter;

/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
