//! Admin-facing account models.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// Whether an account may sign in and transact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Suspended,
    PendingApproval,
}

/// A customer account as seen from the admin screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCustomer {
    pub id: EntityId,
    pub email: String,
    pub full_name: String,
    pub status: AccountStatus,
    pub order_count: u64,
    pub total_spent: f64,
    pub registered_at: String,
}

/// A seller account as seen from the admin screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSeller {
    pub id: EntityId,
    pub email: String,
    pub shop_name: String,
    pub status: AccountStatus,
    pub product_count: u64,
    pub total_revenue: f64,
    pub registered_at: String,
}

/// Payload for changing an account's status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountStatusRequest {
    pub status: AccountStatus,
}
