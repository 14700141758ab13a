//! Storefront REST API adapters (stock + catalog lookups).

pub mod http;

pub use http::HttpStorefrontApi;
