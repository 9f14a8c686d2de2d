//! Category and product models.
//!
//! Catalog envelopes are passed through to consumers without empty-state
//! substitution: list screens branch on the page's `empty` flag and
//! render their own placeholder, so a fabricated default object would
//! only mask a missing payload.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub product_count: u64,
}

/// Whether a product is visible to customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Active,
    Inactive,
    OutOfStock,
}

/// Compact product representation used in list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: EntityId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub category_id: EntityId,
    pub status: ProductStatus,
    pub average_rating: f64,
}

/// Full product detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub seller_id: EntityId,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub category_id: EntityId,
    pub status: ProductStatus,
    pub stock_quantity: u32,
    pub average_rating: f64,
    pub review_count: u64,
    pub created_at: String,
    pub updated_at: String,
}
