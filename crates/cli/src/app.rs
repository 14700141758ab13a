//! Composition root: wires configuration, adapters, and the cart engine.

use serde::Serialize;

use storefront_cart::{CartEngine, CartItem, NotifyingCart, UpdateProductAmount};
use storefront_infra::{CartConfig, FileStorage, HttpStorefrontApi, TracingNotifier};

use crate::cli::Commands;

pub type StorefrontCart =
    NotifyingCart<HttpStorefrontApi, HttpStorefrontApi, FileStorage, TracingNotifier>;

/// Build the notifying cart described by `config`, hydrated from storage.
pub fn build_cart(config: &CartConfig) -> anyhow::Result<StorefrontCart> {
    let api = match &config.api_token {
        Some(token) => HttpStorefrontApi::with_token(&config.api_url, token),
        None => HttpStorefrontApi::new(&config.api_url),
    };

    let storage = match &config.data_dir {
        Some(dir) => FileStorage::new(dir, &config.storage_key),
        None => FileStorage::in_data_dir(&config.storage_key)?,
    };
    tracing::debug!(path = %storage.path().display(), api = api.base_url(), "cart wired");

    let engine = CartEngine::new(api.clone(), api, storage);
    Ok(NotifyingCart::new(engine, TracingNotifier::new()))
}

/// Run one cart command.
pub async fn execute(cart: &mut StorefrontCart, command: Commands) {
    match command {
        Commands::Show => {}
        Commands::Add { product_id } => cart.add_product(product_id).await,
        Commands::Remove { product_id } => cart.remove_product(product_id),
        Commands::Update { product_id, amount } => {
            cart.update_product_amount(UpdateProductAmount { product_id, amount })
                .await
        }
    }
}

/// Printable view of the cart.
#[derive(Debug, Serialize)]
pub struct CartView<'a> {
    pub items: &'a [CartItem],
    pub total_units: u64,
}

impl<'a> CartView<'a> {
    pub fn of(cart: &'a StorefrontCart) -> Self {
        Self {
            items: cart.cart().items(),
            total_units: cart.cart().total_units(),
        }
    }
}
