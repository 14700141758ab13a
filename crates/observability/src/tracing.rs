//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// JSON logs + timestamps, configurable via RUST_LOG.
pub fn init_json() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Compact human-readable logs on stderr, so stdout stays free for command output.
pub fn init_pretty() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .compact()
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
