//! Log output for the function.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. CloudWatch stamps each
/// line itself, so timestamps and colours are left out.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}
