//! Tracing/logging setup shared by storefront binaries.

/// Initialize process-wide structured (JSON) logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_json();
}

/// Initialize human-readable logging on stderr (interactive CLI use).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init_pretty() {
    tracing::init_pretty();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
