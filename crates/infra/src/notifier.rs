//! Notifier that forwards user-facing messages to the log.

use storefront_cart::Notifier;

/// Emits every notification as a `warn` event under the `storefront::notify` target.
///
/// Front ends without a toast surface (CLI, headless runs) use this as their
/// message sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(target: "storefront::notify", "{message}");
    }
}
