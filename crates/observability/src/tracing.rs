//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process with the default filter.
///
/// `RUST_LOG` wins when set; otherwise this workspace's compiler events are
/// kept at debug so generated fragments show up in test logs.
pub fn init() {
    init_with_filter("shiplink=debug");
}

/// Initialize with an explicit fallback filter directive.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_with_filter(directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}
