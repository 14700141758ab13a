//! Default notification presenter.
//!
//! `NotifyingCart` keeps the fire-and-forget surface storefront UIs expect: every
//! rejected operation becomes a user-facing message and the call returns `()`.
//! Callers that need the reason should use [`CartEngine`] directly.

use storefront_core::ProductId;

use crate::cart::Cart;
use crate::engine::{CartEngine, UpdateProductAmount};
use crate::error::{CartError, CartResult};
use crate::ports::{CartStorage, CatalogLookup, Notifier, StockLookup};

pub const OUT_OF_STOCK_MESSAGE: &str = "Requested quantity is out of stock";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add product";
pub const REMOVE_FAILED_MESSAGE: &str = "Failed to remove product";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update product quantity";

/// Cart operation kinds (used to pick the failure message).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    Update,
}

impl CartOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            CartOperation::Add => "add",
            CartOperation::Remove => "remove",
            CartOperation::Update => "update",
        }
    }
}

/// Message shown to the user when `operation` fails with `err`.
///
/// Only stock shortages get a specific message; every other cause collapses into
/// the operation's generic failure message.
pub fn user_message(operation: CartOperation, err: &CartError) -> &'static str {
    match (err, operation) {
        (CartError::OutOfStock { .. }, _) => OUT_OF_STOCK_MESSAGE,
        (_, CartOperation::Add) => ADD_FAILED_MESSAGE,
        (_, CartOperation::Remove) => REMOVE_FAILED_MESSAGE,
        (_, CartOperation::Update) => UPDATE_FAILED_MESSAGE,
    }
}

/// Cart engine wrapped with a notifier.
#[derive(Debug)]
pub struct NotifyingCart<S, C, P, N> {
    engine: CartEngine<S, C, P>,
    notifier: N,
}

impl<S, C, P, N> NotifyingCart<S, C, P, N>
where
    S: StockLookup,
    C: CatalogLookup,
    P: CartStorage,
    N: Notifier,
{
    pub fn new(engine: CartEngine<S, C, P>, notifier: N) -> Self {
        Self { engine, notifier }
    }

    pub fn cart(&self) -> &Cart {
        self.engine.cart()
    }

    pub async fn add_product(&mut self, product_id: ProductId) {
        let result = self.engine.add_product(product_id).await;
        self.present(CartOperation::Add, product_id, result);
    }

    pub fn remove_product(&mut self, product_id: ProductId) {
        let result = self.engine.remove_product(product_id);
        self.present(CartOperation::Remove, product_id, result);
    }

    pub async fn update_product_amount(&mut self, request: UpdateProductAmount) {
        let result = self.engine.update_product_amount(request).await;
        self.present(CartOperation::Update, request.product_id, result);
    }

    fn present(&self, operation: CartOperation, product_id: ProductId, result: CartResult) {
        if let Err(err) = result {
            tracing::debug!(
                operation = operation.as_str(),
                %product_id,
                error = %err,
                "cart operation rejected"
            );
            self.notifier.notify(user_message(operation, &err));
        }
    }
}
