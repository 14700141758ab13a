//! Persisted cart snapshot codec.
//!
//! Current format is a versioned envelope:
//!
//! ```json
//! { "version": 1, "items": [ { "id": 1, "title": "...", "price": 179.9, "image": "...", "amount": 2 } ] }
//! ```
//!
//! Older storefronts wrote the bare item array with no envelope. Those snapshots
//! are still accepted and treated as version 1.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_core::DomainError;

use crate::cart::Cart;
use crate::product::CartItem;

/// Version written by [`encode`].
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),

    #[error("snapshot violates cart invariants: {0}")]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    items: &'a [CartItem],
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredSnapshot {
    Versioned { version: u32, items: Vec<CartItem> },
    Legacy(Vec<CartItem>),
}

/// Serialize `cart` into the current snapshot format.
pub fn encode(cart: &Cart) -> Result<String, SnapshotError> {
    let snapshot = SnapshotRef {
        version: SNAPSHOT_VERSION,
        items: cart.items(),
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Decode and validate a stored snapshot.
pub fn decode(raw: &str) -> Result<Cart, SnapshotError> {
    let items = match serde_json::from_str::<StoredSnapshot>(raw)? {
        StoredSnapshot::Versioned { version, items } if version == SNAPSHOT_VERSION => items,
        StoredSnapshot::Versioned { version, .. } => {
            return Err(SnapshotError::UnsupportedVersion(version));
        }
        StoredSnapshot::Legacy(items) => {
            tracing::debug!(items = items.len(), "migrating legacy cart snapshot");
            items
        }
    };

    Ok(Cart::from_items(items)?)
}

/// Hydrate a cart from an optional stored snapshot.
///
/// Missing snapshots yield an empty cart. Snapshots that fail to decode are
/// logged and discarded.
pub fn decode_or_empty(raw: Option<&str>) -> Cart {
    let Some(raw) = raw else {
        return Cart::new();
    };

    match decode(raw) {
        Ok(cart) => cart,
        Err(err) => {
            tracing::warn!(error = %err, "discarding unreadable cart snapshot");
            Cart::new()
        }
    }
}
