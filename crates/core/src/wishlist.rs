//! Wishlist models.

use serde::{Deserialize, Serialize};

use crate::envelope::EmptyState;
use crate::types::EntityId;

/// One saved product on a wishlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: EntityId,
    pub product_id: EntityId,
    pub product_name: String,
    pub price: f64,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub added_at: String,
}

/// The customer's wishlist.
///
/// Like the cart, a never-touched wishlist is `result: null` on the
/// wire and surfaces as [`Wishlist::empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    pub id: EntityId,
    pub customer_id: EntityId,
    pub total_items: u32,
    pub items: Vec<WishlistItem>,
    pub created_at: String,
    pub updated_at: String,
}

impl EmptyState for Wishlist {
    fn empty() -> Self {
        Self {
            id: String::new(),
            customer_id: String::new(),
            total_items: 0,
            items: Vec::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}
