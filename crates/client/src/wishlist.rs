//! Wishlist endpoints.

use souk_core::wishlist::Wishlist;
use souk_core::Envelope;

use crate::error::ClientError;
use crate::http::ApiClient;

/// Fetch the signed-in customer's wishlist.
///
/// `GET /wishlists/me`. Answers `result: null` for a never-touched
/// wishlist.
pub async fn get_wishlist(api: &ApiClient) -> Result<Envelope<Wishlist>, ClientError> {
    api.get("/wishlists/me", &[]).await
}

/// Add or remove a product from the wishlist in one call.
///
/// `POST /wishlists/me/items/{productId}/toggle`. Returns the updated
/// wishlist.
pub async fn toggle_product(
    api: &ApiClient,
    product_id: &str,
) -> Result<Envelope<Wishlist>, ClientError> {
    api.post_empty(&format!("/wishlists/me/items/{product_id}/toggle"))
        .await
}

/// Check whether a product is on the wishlist.
///
/// `GET /wishlists/me/items/{productId}`. Answers `result: null` when
/// the product is absent; consumers read that as `false`.
pub async fn check_product(
    api: &ApiClient,
    product_id: &str,
) -> Result<Envelope<bool>, ClientError> {
    api.get(&format!("/wishlists/me/items/{product_id}"), &[])
        .await
}
