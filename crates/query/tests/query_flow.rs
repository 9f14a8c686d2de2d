//! End-to-end tests for the query layer against a scripted backend:
//! deduplication, empty-state normalization, invalidation after
//! mutations, retry, and error pass-through.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use common::MockBackend;
use serde_json::json;
use souk_client::{ApiClient, ClientConfig, ClientError};
use souk_core::cart::{AddToCartRequest, Cart};
use souk_core::envelope::EmptyState;
use souk_core::wishlist::Wishlist;
use souk_query::{Queries, QueryError, QueryOptions};

fn queries(base_url: &str) -> Queries {
    let config = ClientConfig::with_base_url(base_url);
    let api = Arc::new(ApiClient::new(config).expect("client"));
    Queries::new(api)
}

fn cart_body() -> serde_json::Value {
    json!({
        "code": 200,
        "result": {
            "id": "cart-1",
            "customerId": "cust-1",
            "totalItems": 2,
            "totalPrice": 31.0,
            "items": [{
                "id": "line-1",
                "productId": "p1",
                "productName": "Mug",
                "thumbnailUrl": null,
                "unitPrice": 15.5,
                "quantity": 2,
                "lineTotal": 31.0
            }],
            "createdAt": "2026-08-01T10:00:00Z",
            "updatedAt": "2026-08-01T10:05:00Z"
        }
    })
}

// ---------------------------------------------------------------------------
// Deduplication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_cart_reads_issue_one_network_call() {
    let (backend, base_url) = MockBackend::spawn().await;
    backend.stub("GET /carts/me", 200, cart_body());
    let queries = queries(&base_url);

    queries.cart(QueryOptions::default()).await.expect("first");
    queries.cart(QueryOptions::default()).await.expect("second");

    assert_eq!(backend.hits("GET /carts/me"), 1);
}

#[tokio::test]
async fn concurrent_cart_reads_issue_one_network_call() {
    let (backend, base_url) = MockBackend::spawn().await;
    backend.stub("GET /carts/me", 200, cart_body());
    let queries = queries(&base_url);

    let (a, b) = tokio::join!(
        queries.cart(QueryOptions::default()),
        queries.cart(QueryOptions::default()),
    );

    assert_eq!(a.expect("a").result, b.expect("b").result);
    assert_eq!(backend.hits("GET /carts/me"), 1);
}

// ---------------------------------------------------------------------------
// Empty-state normalization
// ---------------------------------------------------------------------------

#[tokio::test]
async fn null_cart_result_becomes_the_documented_empty_cart() {
    let (backend, base_url) = MockBackend::spawn().await;
    backend.stub("GET /carts/me", 200, json!({"code": 200, "result": null}));
    let queries = queries(&base_url);

    let envelope = queries.cart(QueryOptions::default()).await.expect("cart");

    assert_eq!(envelope.code, 200);
    assert_eq!(envelope.result, Some(Cart::empty()));
}

#[tokio::test]
async fn null_wishlist_result_becomes_the_empty_wishlist() {
    let (backend, base_url) = MockBackend::spawn().await;
    backend.stub(
        "GET /wishlists/me",
        200,
        json!({"code": 200, "result": null}),
    );
    let queries = queries(&base_url);

    let envelope = queries
        .wishlist(QueryOptions::default())
        .await
        .expect("wishlist");

    assert_eq!(envelope.result, Some(Wishlist::empty()));
}

#[tokio::test]
async fn null_membership_probe_reads_as_false() {
    let (backend, base_url) = MockBackend::spawn().await;
    backend.stub(
        "GET /wishlists/me/items/p1",
        200,
        json!({"code": 200, "result": null}),
    );
    let queries = queries(&base_url);

    let envelope = queries
        .check_product_in_wishlist("p1", QueryOptions::default())
        .await
        .expect("probe");

    assert_eq!(envelope.result, Some(false));
}

#[tokio::test]
async fn present_payloads_are_not_rewritten() {
    let (backend, base_url) = MockBackend::spawn().await;
    backend.stub("GET /carts/me", 200, cart_body());
    let queries = queries(&base_url);

    let envelope = queries.cart(QueryOptions::default()).await.expect("cart");
    let cart = envelope.result.expect("payload");
    assert_eq!(cart.id, "cart-1");
    assert_eq!(cart.total_items, 2);
}

// ---------------------------------------------------------------------------
// Mutations and staleness
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_to_cart_invalidates_the_cached_cart() {
    let (backend, base_url) = MockBackend::spawn().await;
    backend.stub_sequence(
        "GET /carts/me",
        vec![(200, json!({"code": 200, "result": null})), (200, cart_body())],
    );
    backend.stub("POST /carts/me/items", 200, cart_body());
    let queries = queries(&base_url);

    let before = queries.cart(QueryOptions::default()).await.expect("before");
    assert_eq!(before.result, Some(Cart::empty()));

    let request = AddToCartRequest {
        product_id: "p1".into(),
        quantity: 2,
    };
    queries.add_to_cart(&request).await.expect("mutation");

    let after = queries.cart(QueryOptions::default()).await.expect("after");
    assert_eq!(after.result.expect("payload").id, "cart-1");
    assert_eq!(backend.hits("GET /carts/me"), 2);
}

#[tokio::test]
async fn invalid_cart_payload_never_reaches_the_backend() {
    let (backend, base_url) = MockBackend::spawn().await;
    let queries = queries(&base_url);

    let request = AddToCartRequest {
        product_id: "p1".into(),
        quantity: 0,
    };
    let result = queries.add_to_cart(&request).await;

    assert_matches!(
        result,
        Err(QueryError::Transport(ClientError::Validation(_)))
    );
    assert_eq!(backend.hits("POST /carts/me/items"), 0);
}

// ---------------------------------------------------------------------------
// Failure handling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn backend_errors_pass_through_unchanged() {
    let (backend, base_url) = MockBackend::spawn().await;
    backend.stub(
        "GET /carts/me",
        503,
        json!({"error": "maintenance window"}),
    );
    let queries = queries(&base_url);

    let result = queries.cart(QueryOptions::default()).await;

    assert_matches!(
        result,
        Err(QueryError::Transport(ClientError::Api { status: 503, .. }))
    );
}

#[tokio::test]
async fn retry_recovers_after_transient_failures() {
    let (backend, base_url) = MockBackend::spawn().await;
    backend.stub_sequence(
        "GET /carts/me",
        vec![
            (500, json!({"error": "boom"})),
            (500, json!({"error": "boom"})),
            (200, cart_body()),
        ],
    );
    let queries = queries(&base_url);

    let envelope = queries
        .cart(QueryOptions::default().retry(2))
        .await
        .expect("recovered");

    assert_eq!(envelope.result.expect("payload").id, "cart-1");
    assert_eq!(backend.hits("GET /carts/me"), 3);
}

#[tokio::test]
async fn disabled_query_is_reported_and_skips_the_network() {
    let (backend, base_url) = MockBackend::spawn().await;
    backend.stub("GET /carts/me", 200, cart_body());
    let queries = queries(&base_url);

    let result = queries.cart(QueryOptions::default().disabled()).await;

    assert_matches!(result, Err(QueryError::Disabled));
    assert_eq!(backend.hits("GET /carts/me"), 0);
}
