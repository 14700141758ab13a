//! `storefront-infra` — adapters for the cart engine's collaborator ports.
//!
//! - [`api`]: HTTP client for the storefront stock/catalog API
//! - [`storage`]: file-backed snapshot storage (one file per storage key)
//! - [`notifier`]: notifier that forwards user messages to `tracing`
//! - [`config`]: environment-driven configuration

pub mod api;
pub mod config;
pub mod notifier;
pub mod storage;

pub use api::HttpStorefrontApi;
pub use config::{CartConfig, ConfigError};
pub use notifier::TracingNotifier;
pub use storage::FileStorage;
