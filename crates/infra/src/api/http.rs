//! HTTP client for the storefront API.
//!
//! Endpoints:
//! - `GET {base_url}/stock/{id}` → `{ "id": 1, "amount": 3 }`
//! - `GET {base_url}/products/{id}` → `{ "id": 1, "title": "...", "price": 179.9, "image": "..." }`

use serde::de::DeserializeOwned;

use storefront_cart::{CatalogLookup, CollaboratorError, Product, Stock, StockLookup};
use storefront_core::ProductId;

/// Client for the storefront stock/catalog API.
///
/// Cheap to clone (the inner `reqwest::Client` is reference-counted).
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpStorefrontApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::new(base_url)
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, CollaboratorError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        let mut req = self.client.get(&url);

        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| CollaboratorError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(%url, status = status.as_u16(), "storefront API returned an error");
            return Err(CollaboratorError::Api(status.as_u16(), body));
        }

        resp.json()
            .await
            .map_err(|e| CollaboratorError::Parse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl StockLookup for HttpStorefrontApi {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, CollaboratorError> {
        let stock: Stock = self.get_json(&format!("stock/{product_id}")).await?;
        if stock.id != product_id {
            return Err(CollaboratorError::Parse(format!(
                "stock response for product {} while asking for {product_id}",
                stock.id
            )));
        }
        Ok(stock)
    }
}

#[async_trait::async_trait]
impl CatalogLookup for HttpStorefrontApi {
    async fn product(&self, product_id: ProductId) -> Result<Product, CollaboratorError> {
        let product: Product = self.get_json(&format!("products/{product_id}")).await?;
        if product.id != product_id {
            return Err(CollaboratorError::Parse(format!(
                "catalog response for product {} while asking for {product_id}",
                product.id
            )));
        }
        Ok(product)
    }
}
