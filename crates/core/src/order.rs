//! Order models, the order status lifecycle, and the checkout payload.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityId;

/// Lifecycle of an order.
///
/// Sellers move orders forward (`Placed -> Confirmed -> Shipped ->
/// Delivered`); customers and admins may cancel before shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Placed,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

/// One product line on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: EntityId,
    pub product_id: EntityId,
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    pub customer_id: EntityId,
    pub status: OrderStatus,
    pub total_price: f64,
    pub items: Vec<OrderItem>,
    pub shipping_address: String,
    #[serde(default)]
    pub payment_reference: Option<String>,
    pub placed_at: String,
    pub updated_at: String,
}

/// Payload for converting the current cart into an order.
///
/// Payment itself happens through an external SDK; the checkout call
/// only carries the opaque reference the payment flow produced.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[validate(length(min = 1, max = 500))]
    pub shipping_address: String,
    #[validate(length(min = 1))]
    pub payment_reference: String,
}

/// Payload for a seller or admin updating an order's status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}
