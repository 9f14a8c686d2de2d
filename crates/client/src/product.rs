//! Product endpoints (customer catalog and the seller's own listings).

use souk_core::catalog::{Product, ProductSummary};
use souk_core::page::{Page, PageQuery};
use souk_core::Envelope;

use crate::error::ClientError;
use crate::http::ApiClient;

/// Fetch a page of products, optionally restricted to a category.
///
/// `GET /products?page=&size=&sortBy=&sortDirection=&search=&categoryId=`.
pub async fn list_products(
    api: &ApiClient,
    query: &PageQuery,
    category_id: Option<&str>,
) -> Result<Envelope<Page<ProductSummary>>, ClientError> {
    let mut pairs = query.to_query_pairs();
    if let Some(category_id) = category_id {
        pairs.push(("categoryId", category_id.to_string()));
    }
    api.get("/products", &pairs).await
}

/// Fetch full detail for one product.
///
/// `GET /products/{id}`.
pub async fn get_product(api: &ApiClient, id: &str) -> Result<Envelope<Product>, ClientError> {
    api.get(&format!("/products/{id}"), &[]).await
}

/// Fetch a page of the signed-in seller's own products.
///
/// `GET /seller/products`. Requires a seller session.
pub async fn list_seller_products(
    api: &ApiClient,
    query: &PageQuery,
) -> Result<Envelope<Page<ProductSummary>>, ClientError> {
    api.get("/seller/products", &query.to_query_pairs()).await
}
