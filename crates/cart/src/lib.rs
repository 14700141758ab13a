//! Storefront cart state engine.
//!
//! This crate holds the cart reconciliation rules (merge with existing lines,
//! stock-bounded quantities, persistence after every successful change). It
//! performs no IO itself: stock, catalog, storage, and notifications are
//! reached through the traits in [`ports`].

pub mod cart;
pub mod engine;
pub mod error;
pub mod memory;
pub mod notify;
pub mod ports;
pub mod product;
pub mod snapshot;

pub use cart::Cart;
pub use engine::{CartEngine, UpdateProductAmount};
pub use error::{CartChange, CartError, CartResult};
pub use notify::{CartOperation, NotifyingCart, user_message};
pub use ports::{CartStorage, CatalogLookup, CollaboratorError, Notifier, StockLookup, StorageError};
pub use product::{CartItem, Product, Stock};
pub use snapshot::{SNAPSHOT_VERSION, SnapshotError};
