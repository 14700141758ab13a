//! Cart state engine.
//!
//! Every operation follows the same pipeline:
//!
//! ```text
//! Operation
//!   ↓
//! 1. Read the current cart
//!   ↓
//! 2. Query collaborators (stock, catalog) as needed
//!   ↓
//! 3. Build a candidate cart (pure transition on a new value)
//!   ↓
//! 4. Encode + write the candidate to storage
//!   ↓
//! 5. Replace the in-memory cart with the candidate
//! ```
//!
//! Any failure before step 5 drops the candidate, so neither memory nor storage
//! ever observes a partial update. Operations take `&mut self`: one engine can
//! only run one operation at a time.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, ProductId};

use crate::cart::Cart;
use crate::error::{CartChange, CartError, CartResult};
use crate::ports::{CartStorage, CatalogLookup, StockLookup};
use crate::product::CartItem;
use crate::snapshot;

/// Request to set the quantity of a product already in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    /// Requested absolute amount. Non-positive values are ignored.
    pub amount: i64,
}

/// Authoritative in-memory cart, mirrored to storage after every successful mutation.
pub struct CartEngine<S, C, P> {
    cart: Cart,
    stock: S,
    catalog: C,
    storage: P,
}

impl<S, C, P> CartEngine<S, C, P>
where
    S: StockLookup,
    C: CatalogLookup,
    P: CartStorage,
{
    /// Build an engine hydrated from `storage`.
    ///
    /// A missing, unreadable, or invalid snapshot yields an empty cart.
    pub fn new(stock: S, catalog: C, storage: P) -> Self {
        let raw = match storage.read() {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read stored cart; starting empty");
                None
            }
        };
        let cart = snapshot::decode_or_empty(raw.as_deref());
        tracing::debug!(items = cart.len(), "cart hydrated");

        Self {
            cart,
            stock,
            catalog,
            storage,
        }
    }

    /// Current cart (read-only).
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of `product_id`, appending a new line if it is not in the cart yet.
    pub async fn add_product(&mut self, product_id: ProductId) -> CartResult {
        let current = self.cart.amount_of(product_id);
        let stock = self.stock.stock(product_id).await?;
        let desired = current.saturating_add(1);

        if desired > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested: u64::from(desired),
                available: stock.amount,
            });
        }

        let (candidate, change) = if current > 0 {
            let candidate = self.cart.with_item_amount(product_id, desired)?;
            (candidate, CartChange::Incremented { amount: desired })
        } else {
            let product = self.catalog.product(product_id).await?;
            let candidate = self.cart.with_appended(CartItem::new(product))?;
            (candidate, CartChange::Added)
        };

        self.commit(candidate)?;
        tracing::info!(%product_id, amount = desired, "product added to cart");
        Ok(change)
    }

    /// Remove the line for `product_id`.
    pub fn remove_product(&mut self, product_id: ProductId) -> CartResult {
        let candidate = self.cart.without(product_id).map_err(|err| match err {
            DomainError::NotFound => CartError::NotInCart(product_id),
            other => CartError::Domain(other),
        })?;

        self.commit(candidate)?;
        tracing::info!(%product_id, "product removed from cart");
        Ok(CartChange::Removed)
    }

    /// Set the amount of a product already in the cart.
    ///
    /// Non-positive amounts are ignored and report [`CartChange::Unchanged`].
    pub async fn update_product_amount(&mut self, request: UpdateProductAmount) -> CartResult {
        let UpdateProductAmount { product_id, amount } = request;
        if amount <= 0 {
            tracing::debug!(%product_id, amount, "ignoring non-positive amount");
            return Ok(CartChange::Unchanged);
        }

        let stock = self.stock.stock(product_id).await?;
        let requested = match u32::try_from(amount) {
            Ok(requested) if requested <= stock.amount => requested,
            _ => {
                return Err(CartError::OutOfStock {
                    product_id,
                    requested: amount.unsigned_abs(),
                    available: stock.amount,
                });
            }
        };

        let candidate = self
            .cart
            .with_item_amount(product_id, requested)
            .map_err(|err| match err {
                DomainError::NotFound => CartError::NotInCart(product_id),
                other => CartError::Domain(other),
            })?;

        self.commit(candidate)?;
        tracing::info!(%product_id, amount = requested, "cart amount updated");
        Ok(CartChange::AmountSet { amount: requested })
    }

    fn commit(&mut self, candidate: Cart) -> Result<(), CartError> {
        let raw = snapshot::encode(&candidate)?;
        self.storage.write(&raw)?;
        self.cart = candidate;
        Ok(())
    }
}

impl<S, C, P> core::fmt::Debug for CartEngine<S, C, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CartEngine").field("cart", &self.cart).finish_non_exhaustive()
    }
}
