//! In-memory collaborators.
//!
//! Intended for tests/dev. `InMemoryInventory` answers both stock and catalog
//! lookups from a fixture table and can be told to fail per product.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use storefront_core::ProductId;

use crate::ports::{CartStorage, CatalogLookup, CollaboratorError, Notifier, StockLookup, StorageError};
use crate::product::{Product, Stock};

#[derive(Debug, Default)]
struct InventoryState {
    products: HashMap<ProductId, Product>,
    stock: HashMap<ProductId, u32>,
    stock_failures: HashMap<ProductId, CollaboratorError>,
    catalog_failures: HashMap<ProductId, CollaboratorError>,
}

/// Fixture-backed stock + catalog service.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    state: RwLock<InventoryState>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `product` with `stock` units available.
    pub fn insert(&self, product: Product, stock: u32) {
        if let Ok(mut state) = self.state.write() {
            state.stock.insert(product.id, stock);
            state.products.insert(product.id, product);
        }
    }

    pub fn set_stock(&self, product_id: ProductId, amount: u32) {
        if let Ok(mut state) = self.state.write() {
            state.stock.insert(product_id, amount);
        }
    }

    /// Make stock lookups for `product_id` fail with `err`.
    pub fn fail_stock(&self, product_id: ProductId, err: CollaboratorError) {
        if let Ok(mut state) = self.state.write() {
            state.stock_failures.insert(product_id, err);
        }
    }

    /// Make catalog lookups for `product_id` fail with `err`.
    pub fn fail_catalog(&self, product_id: ProductId, err: CollaboratorError) {
        if let Ok(mut state) = self.state.write() {
            state.catalog_failures.insert(product_id, err);
        }
    }

    pub fn clear_failures(&self) {
        if let Ok(mut state) = self.state.write() {
            state.stock_failures.clear();
            state.catalog_failures.clear();
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, InventoryState>, CollaboratorError> {
        self.state
            .read()
            .map_err(|_| CollaboratorError::Unavailable("lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl StockLookup for InMemoryInventory {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, CollaboratorError> {
        let state = self.read()?;
        if let Some(err) = state.stock_failures.get(&product_id) {
            return Err(err.clone());
        }
        let amount = state
            .stock
            .get(&product_id)
            .copied()
            .ok_or_else(|| CollaboratorError::Api(404, format!("no stock for product {product_id}")))?;
        Ok(Stock {
            id: product_id,
            amount,
        })
    }
}

#[async_trait::async_trait]
impl CatalogLookup for InMemoryInventory {
    async fn product(&self, product_id: ProductId) -> Result<Product, CollaboratorError> {
        let state = self.read()?;
        if let Some(err) = state.catalog_failures.get(&product_id) {
            return Err(err.clone());
        }
        state
            .products
            .get(&product_id)
            .cloned()
            .ok_or_else(|| CollaboratorError::Api(404, format!("product {product_id} not found")))
    }
}

/// Single-slot in-memory snapshot storage.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    slot: RwLock<Option<String>>,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(snapshot.into())),
            ..Self::default()
        }
    }

    /// Currently stored snapshot.
    pub fn snapshot(&self) -> Option<String> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl CartStorage for InMemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let slot = self
            .slot
            .read()
            .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))?;
        Ok(slot.clone())
    }

    fn write(&self, snapshot: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        let mut slot = self
            .slot
            .write()
            .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))?;
        *slot = Some(snapshot.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Notifier that records every message.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RwLock<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.read().map(|m| m.clone()).unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.messages.read().map(|m| m.len()).unwrap_or(0)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.write() {
            messages.push(message.to_string());
        }
    }
}
