//! Cart endpoints. All of them operate on the signed-in customer's
//! cart; there is no cart id in the paths.

use souk_core::cart::{AddToCartRequest, Cart, UpdateCartItemRequest};
use souk_core::{CoreError, Envelope};
use validator::Validate;

use crate::error::ClientError;
use crate::http::ApiClient;

/// Fetch the current cart.
///
/// `GET /carts/me`. Answers `result: null` when the customer has never
/// added anything.
pub async fn get_cart(api: &ApiClient) -> Result<Envelope<Cart>, ClientError> {
    api.get("/carts/me", &[]).await
}

/// Add a product to the cart.
///
/// `POST /carts/me/items`. The payload is validated locally first; an
/// invalid quantity never reaches the network.
pub async fn add_item(
    api: &ApiClient,
    request: &AddToCartRequest,
) -> Result<Envelope<Cart>, ClientError> {
    request.validate().map_err(CoreError::from)?;
    api.post("/carts/me/items", request).await
}

/// Change the quantity of an existing cart line.
///
/// `PUT /carts/me/items/{itemId}`.
pub async fn update_item(
    api: &ApiClient,
    item_id: &str,
    request: &UpdateCartItemRequest,
) -> Result<Envelope<Cart>, ClientError> {
    request.validate().map_err(CoreError::from)?;
    api.put(&format!("/carts/me/items/{item_id}"), request).await
}

/// Remove one line from the cart.
///
/// `DELETE /carts/me/items/{itemId}`.
pub async fn remove_item(api: &ApiClient, item_id: &str) -> Result<Envelope<Cart>, ClientError> {
    api.delete(&format!("/carts/me/items/{item_id}")).await
}

/// Empty the cart entirely.
///
/// `DELETE /carts/me`.
pub async fn clear_cart(api: &ApiClient) -> Result<Envelope<Cart>, ClientError> {
    api.delete("/carts/me").await
}
