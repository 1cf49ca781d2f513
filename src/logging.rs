//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for account
//! and transaction listings. The filter defaults to `info` and can be
//! overridden with `RUST_LOG`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
