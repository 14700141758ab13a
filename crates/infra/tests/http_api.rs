use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use storefront_cart::{
    CartEngine, CatalogLookup, CollaboratorError, StockLookup, UpdateProductAmount,
    memory::InMemoryStorage,
};
use storefront_core::ProductId;
use storefront_infra::HttpStorefrontApi;

#[derive(Clone, Default)]
struct Fixture {
    stock: Arc<HashMap<u64, u32>>,
    required_token: Option<&'static str>,
}

struct StubServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl StubServer {
    async fn spawn(fixture: Fixture) -> Self {
        let app = Router::new()
            .route("/stock/:id", get(stock))
            .route("/products/:id", get(product))
            .route("/broken/stock/:id", get(|| async { "not json" }))
            .with_state(fixture);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn authorized(fixture: &Fixture, headers: &HeaderMap) -> bool {
    match fixture.required_token {
        None => true,
        Some(token) => headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|v| v == format!("Bearer {token}"))
            .unwrap_or(false),
    }
}

async fn stock(
    State(fixture): State<Fixture>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&fixture, &headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let amount = fixture.stock.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({ "id": id, "amount": amount })))
}

async fn product(
    State(fixture): State<Fixture>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&fixture, &headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if !fixture.stock.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "id": id,
        "title": format!("Sneaker {id}"),
        "price": 179.9,
        "image": format!("https://cdn.example.com/{id}.jpg"),
        "brand": "Acme",
    })))
}

fn fixture(stock: &[(u64, u32)]) -> Fixture {
    Fixture {
        stock: Arc::new(stock.iter().copied().collect()),
        required_token: None,
    }
}

#[tokio::test]
async fn fetches_stock_and_product() {
    let server = StubServer::spawn(fixture(&[(1, 5)])).await;
    let api = HttpStorefrontApi::new(&server.base_url);

    let stock = api.stock(ProductId::new(1)).await.unwrap();
    assert_eq!(stock.amount, 5);

    let product = api.product(ProductId::new(1)).await.unwrap();
    assert_eq!(product.id, ProductId::new(1));
    assert_eq!(product.title, "Sneaker 1");
    assert_eq!(product.price, serde_json::Number::from_f64(179.9).unwrap());
    assert_eq!(product.extra.get("brand"), Some(&json!("Acme")));
}

#[tokio::test]
async fn missing_product_maps_to_api_error() {
    let server = StubServer::spawn(fixture(&[])).await;
    let api = HttpStorefrontApi::new(&server.base_url);

    let err = api.stock(ProductId::new(7)).await.unwrap_err();
    assert!(matches!(err, CollaboratorError::Api(404, _)));
}

#[tokio::test]
async fn bearer_token_is_sent() {
    let mut fx = fixture(&[(1, 2)]);
    fx.required_token = Some("s3cret");
    let server = StubServer::spawn(fx).await;

    let anonymous = HttpStorefrontApi::new(&server.base_url);
    assert!(matches!(
        anonymous.stock(ProductId::new(1)).await.unwrap_err(),
        CollaboratorError::Api(401, _)
    ));

    let authed = HttpStorefrontApi::with_token(&server.base_url, "s3cret");
    assert_eq!(authed.stock(ProductId::new(1)).await.unwrap().amount, 2);
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let server = StubServer::spawn(fixture(&[])).await;
    let api = HttpStorefrontApi::new(format!("{}/broken", server.base_url));

    let err = api.stock(ProductId::new(1)).await.unwrap_err();
    assert!(matches!(err, CollaboratorError::Parse(_)));
}

#[tokio::test]
async fn unreachable_server_maps_to_network_error() {
    // Bind then drop a listener to get a port with nothing behind it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpStorefrontApi::new(format!("http://{addr}"));
    let err = api.stock(ProductId::new(1)).await.unwrap_err();
    assert!(matches!(err, CollaboratorError::Network(_)));
}

#[tokio::test]
async fn engine_runs_against_http_api() {
    let server = StubServer::spawn(fixture(&[(1, 5), (2, 1)])).await;
    let api = HttpStorefrontApi::new(&server.base_url);
    let storage = Arc::new(InMemoryStorage::new());
    let mut engine = CartEngine::new(api.clone(), api, storage.clone());

    for _ in 0..3 {
        engine.add_product(ProductId::new(1)).await.unwrap();
    }
    engine.add_product(ProductId::new(2)).await.unwrap();
    assert!(engine.add_product(ProductId::new(2)).await.is_err());

    engine
        .update_product_amount(UpdateProductAmount {
            product_id: ProductId::new(1),
            amount: 5,
        })
        .await
        .unwrap();

    assert_eq!(engine.cart().amount_of(ProductId::new(1)), 5);
    assert_eq!(engine.cart().amount_of(ProductId::new(2)), 1);
    assert_eq!(storage.writes(), 5);

    let stored: Value = serde_json::from_str(&storage.snapshot().unwrap()).unwrap();
    assert_eq!(stored["items"][0]["price"], 179.9);
    assert_eq!(stored["items"][0]["brand"], "Acme");
}
