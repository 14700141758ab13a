//! Collaborator contracts consumed by the cart engine.
//!
//! The engine never talks to HTTP, storage backends, or the UI directly. Adapters
//! (see `storefront-infra`) and the in-memory implementations in
//! [`crate::memory`] plug in here.

use std::sync::Arc;

use thiserror::Error;

use storefront_core::ProductId;

use crate::product::{Product, Stock};

/// Failure from a remote lookup (stock or catalog).
///
/// Every variant is treated the same way by the engine: the operation aborts
/// and the cart is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}

/// Failure reading or writing the persisted cart snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Remote stock query.
#[async_trait::async_trait]
pub trait StockLookup: Send + Sync {
    /// Units currently available for `product_id`.
    async fn stock(&self, product_id: ProductId) -> Result<Stock, CollaboratorError>;
}

/// Remote product catalog.
#[async_trait::async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Full product metadata (without any cart amount).
    async fn product(&self, product_id: ProductId) -> Result<Product, CollaboratorError>;
}

/// Synchronous key-value slot holding the serialized cart snapshot.
///
/// Implementations are bound to a single storage key.
pub trait CartStorage: Send + Sync {
    /// Read the stored snapshot, `None` if nothing was ever written.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored snapshot.
    fn write(&self, snapshot: &str) -> Result<(), StorageError>;
}

/// User-facing message sink (toast, status line, log...).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

#[async_trait::async_trait]
impl<S> StockLookup for Arc<S>
where
    S: StockLookup + ?Sized,
{
    async fn stock(&self, product_id: ProductId) -> Result<Stock, CollaboratorError> {
        (**self).stock(product_id).await
    }
}

#[async_trait::async_trait]
impl<C> CatalogLookup for Arc<C>
where
    C: CatalogLookup + ?Sized,
{
    async fn product(&self, product_id: ProductId) -> Result<Product, CollaboratorError> {
        (**self).product(product_id).await
    }
}

impl<S> CartStorage for Arc<S>
where
    S: CartStorage + ?Sized,
{
    fn read(&self) -> Result<Option<String>, StorageError> {
        (**self).read()
    }

    fn write(&self, snapshot: &str) -> Result<(), StorageError> {
        (**self).write(snapshot)
    }
}

impl<N> Notifier for Arc<N>
where
    N: Notifier + ?Sized,
{
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}
