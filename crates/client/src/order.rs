//! Order endpoints for customers and sellers.

use souk_core::order::{CheckoutRequest, Order, OrderStatus, UpdateOrderStatusRequest};
use souk_core::page::{Page, PageQuery};
use souk_core::{CoreError, Envelope};
use validator::Validate;

use crate::error::ClientError;
use crate::http::ApiClient;

/// Fetch a page of the signed-in customer's orders.
///
/// `GET /orders`.
pub async fn list_orders(
    api: &ApiClient,
    query: &PageQuery,
) -> Result<Envelope<Page<Order>>, ClientError> {
    api.get("/orders", &query.to_query_pairs()).await
}

/// Fetch one order.
///
/// `GET /orders/{id}`.
pub async fn get_order(api: &ApiClient, id: &str) -> Result<Envelope<Order>, ClientError> {
    api.get(&format!("/orders/{id}"), &[]).await
}

/// Convert the current cart into an order.
///
/// `POST /orders/checkout`. The backend drains the cart on success, so
/// callers must treat any cached cart as stale afterwards.
pub async fn checkout(
    api: &ApiClient,
    request: &CheckoutRequest,
) -> Result<Envelope<Order>, ClientError> {
    request.validate().map_err(CoreError::from)?;
    api.post("/orders/checkout", request).await
}

/// Fetch a page of orders containing the signed-in seller's products.
///
/// `GET /seller/orders`. Requires a seller session.
pub async fn list_seller_orders(
    api: &ApiClient,
    query: &PageQuery,
) -> Result<Envelope<Page<Order>>, ClientError> {
    api.get("/seller/orders", &query.to_query_pairs()).await
}

/// Move an order to a new status.
///
/// `PUT /seller/orders/{id}/status`. Requires a seller or admin
/// session; the backend enforces the legal transitions.
pub async fn update_order_status(
    api: &ApiClient,
    id: &str,
    status: OrderStatus,
) -> Result<Envelope<Order>, ClientError> {
    let request = UpdateOrderStatusRequest { status };
    api.put(&format!("/seller/orders/{id}/status"), &request)
        .await
}
