use thiserror::Error;

use storefront_core::{DomainError, ProductId};

use crate::ports::{CollaboratorError, StorageError};
use crate::snapshot::SnapshotError;

/// Result of a cart operation.
pub type CartResult = Result<CartChange, CartError>;

/// What a successful operation did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended with a single unit.
    Added,
    /// An existing line was bumped to `amount`.
    Incremented { amount: u32 },
    /// A line was removed.
    Removed,
    /// A line was set to exactly `amount`.
    AmountSet { amount: u32 },
    /// The request was a no-op (e.g. non-positive amount).
    Unchanged,
}

/// Why a cart operation was rejected. The cart is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("product {product_id}: requested {requested}, only {available} in stock")]
    OutOfStock {
        product_id: ProductId,
        requested: u64,
        available: u32,
    },

    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to encode cart snapshot: {0}")]
    Encoding(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<SnapshotError> for CartError {
    fn from(err: SnapshotError) -> Self {
        Self::Encoding(err.to_string())
    }
}
