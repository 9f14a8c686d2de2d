//! Category endpoints.

use souk_core::catalog::Category;
use souk_core::Envelope;

use crate::error::ClientError;
use crate::http::ApiClient;

/// Fetch all categories.
///
/// `GET /categories`. The full category tree is small enough that the
/// backend does not paginate it.
pub async fn list_categories(api: &ApiClient) -> Result<Envelope<Vec<Category>>, ClientError> {
    api.get("/categories", &[]).await
}

/// Fetch one category.
///
/// `GET /categories/{id}`.
pub async fn get_category(api: &ApiClient, id: &str) -> Result<Envelope<Category>, ClientError> {
    api.get(&format!("/categories/{id}"), &[]).await
}
