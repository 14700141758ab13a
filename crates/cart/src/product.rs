use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use storefront_core::{Entity, ProductId};

/// Catalog metadata for a product (matches the catalog API response shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Display price exactly as the catalog sent it (e.g. `179.9`). Informational only.
    pub price: Number,
    pub image: String,
    /// Catalog fields the cart does not interpret, kept so they survive a snapshot.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: impl Into<Number>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price: price.into(),
            image: image.into(),
            extra: Map::new(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Units available for a product at query time (stock API response shape).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: u32,
}

/// Cart line: a product plus the quantity placed in the cart.
///
/// Serialized flat (`{"id", "title", "price", "image", ..., "amount"}`) so stored
/// carts keep the shape of a product with an `amount` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl CartItem {
    /// A fresh line for `product` with a single unit.
    pub fn new(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// A copy of this line carrying `amount` units.
    pub fn with_amount(&self, amount: u32) -> Self {
        Self {
            product: self.product.clone(),
            amount,
        }
    }
}

impl Entity for CartItem {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product.id
    }
}
