//! Shopping cart models and mutation payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::envelope::EmptyState;
use crate::types::EntityId;

/// Maximum quantity of a single product per cart line.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// One line in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: EntityId,
    pub product_id: EntityId,
    pub product_name: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

/// The customer's cart.
///
/// A customer who has never added anything has no cart row on the
/// backend; those endpoints answer `result: null` and consumers see
/// [`Cart::empty`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: EntityId,
    pub customer_id: EntityId,
    pub total_items: u32,
    pub total_price: f64,
    pub items: Vec<CartItem>,
    pub created_at: String,
    pub updated_at: String,
}

impl EmptyState for Cart {
    fn empty() -> Self {
        Self {
            id: String::new(),
            customer_id: String::new(),
            total_items: 0,
            total_price: 0.0,
            items: Vec::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

/// Payload for adding a product to the cart.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    #[validate(length(min = 1))]
    pub product_id: EntityId,
    #[validate(range(min = 1, max = 99))]
    pub quantity: u32,
}

/// Payload for changing the quantity of an existing cart line.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItemRequest {
    #[validate(range(min = 1, max = 99))]
    pub quantity: u32,
}
