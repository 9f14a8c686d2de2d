//! Integration tests for the transport layer: envelope decoding,
//! error surfacing, auth cookie and correlation headers, and query
//! string construction.

mod common;

use assert_matches::assert_matches;
use common::MockBackend;
use serde_json::json;
use souk_client::{cart, category, health, product, wishlist, ApiClient, ClientConfig, ClientError, Session};
use souk_core::cart::AddToCartRequest;
use souk_core::page::{PageQuery, SortDirection};
use souk_core::Role;

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(ClientConfig::with_base_url(base_url)).expect("client")
}

// ---------------------------------------------------------------------------
// Envelope decoding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn category_list_decodes_into_typed_envelope() {
    let (backend, base_url) = MockBackend::spawn().await;
    backend.respond(
        200,
        json!({
            "code": 200,
            "result": [{
                "id": "c1",
                "name": "Kitchen",
                "slug": "kitchen",
                "description": null,
                "imageUrl": null,
                "productCount": 12
            }]
        }),
    );

    let envelope = category::list_categories(&client(&base_url))
        .await
        .expect("decode");

    let categories = envelope.result.expect("payload");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].slug, "kitchen");
    assert_eq!(categories[0].product_count, 12);
}

#[tokio::test]
async fn null_result_decodes_to_none_without_substitution() {
    let (backend, base_url) = MockBackend::spawn().await;
    backend.respond(200, json!({"code": 200, "result": null}));

    // The transport layer does not normalize; that is the hook layer's
    // job.
    let envelope = cart::get_cart(&client(&base_url)).await.expect("decode");
    assert_eq!(envelope.code, 200);
    assert!(envelope.result.is_none());
}

// ---------------------------------------------------------------------------
// Error surfacing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_success_status_surfaces_status_and_body() {
    let (backend, base_url) = MockBackend::spawn().await;
    backend.respond(403, json!({"error": "forbidden"}));

    let result = cart::get_cart(&client(&base_url)).await;

    assert_matches!(
        result,
        Err(ClientError::Api { status: 403, ref body }) if body.contains("forbidden")
    );
}

#[tokio::test]
async fn unreachable_backend_surfaces_request_error() {
    // Port 1 is never listening.
    let result = cart::get_cart(&client("http://127.0.0.1:1")).await;
    assert_matches!(result, Err(ClientError::Request(_)));
}

#[tokio::test]
async fn invalid_payload_fails_before_any_request() {
    let (backend, base_url) = MockBackend::spawn().await;
    let request = AddToCartRequest {
        product_id: String::new(),
        quantity: 1,
    };

    let result = cart::add_item(&client(&base_url), &request).await;

    assert_matches!(result, Err(ClientError::Validation(_)));
    assert!(backend.requests().is_empty());
}

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn session_cookie_is_attached_with_versioned_key() {
    let (backend, base_url) = MockBackend::spawn().await;
    let config = ClientConfig::with_base_url(&base_url)
        .with_session(Session::new(Role::Customer, "tok-42"));
    let api = ApiClient::new(config).expect("client");

    cart::get_cart(&api).await.expect("request");

    let recorded = backend.only_request();
    assert_eq!(
        recorded.cookie.as_deref(),
        Some(format!("{}=tok-42", Role::Customer.session_cookie()).as_str())
    );
}

#[tokio::test]
async fn mutations_carry_a_correlation_id_and_reads_do_not() {
    let (backend, base_url) = MockBackend::spawn().await;
    let api = client(&base_url);

    cart::get_cart(&api).await.expect("read");
    wishlist::toggle_product(&api, "p1").await.expect("mutate");

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "GET");
    assert!(requests[0].request_id.is_none());
    assert_eq!(requests[1].method, "POST");
    let id = requests[1].request_id.as_deref().expect("correlation id");
    assert!(!id.is_empty());
}

// ---------------------------------------------------------------------------
// Query strings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn product_list_builds_the_pagination_query() {
    let (backend, base_url) = MockBackend::spawn().await;
    let query = PageQuery::first()
        .size(50)
        .sort("price", SortDirection::Desc)
        .search("mug");

    product::list_products(&client(&base_url), &query, Some("c1"))
        .await
        .expect("request");

    let recorded = backend.only_request();
    assert_eq!(recorded.path, "/products");
    let query_string = recorded.query.expect("query string");
    assert!(query_string.contains("page=0"));
    assert!(query_string.contains("size=50"));
    assert!(query_string.contains("sortBy=price"));
    assert!(query_string.contains("sortDirection=DESC"));
    assert!(query_string.contains("search=mug"));
    assert!(query_string.contains("categoryId=c1"));
}

#[tokio::test]
async fn paths_embed_their_parameters() {
    let (backend, base_url) = MockBackend::spawn().await;
    let api = client(&base_url);

    wishlist::check_product(&api, "p9").await.expect("request");

    assert_eq!(backend.only_request().path, "/wishlists/me/items/p9");
}

// ---------------------------------------------------------------------------
// Health probe
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_probe_decodes_the_bare_body() {
    let (backend, base_url) = MockBackend::spawn().await;
    backend.respond(200, json!({"status": "ok", "version": "1.4.2"}));

    let status = health::check(&client(&base_url)).await.expect("health");

    assert_eq!(status.status, "ok");
    assert_eq!(status.version, "1.4.2");
}
