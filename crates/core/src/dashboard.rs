//! Seller and admin dashboard stat blocks.
//!
//! Dashboard endpoints answer `result: null` for accounts with no
//! activity yet, so both stat blocks carry an all-zeros empty state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::envelope::EmptyState;

/// Date range for dashboard queries; both bounds are inclusive UTC days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl StatRange {
    /// Render as query-string pairs (RFC 3339 bounds).
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("from", self.from.to_rfc3339()),
            ("to", self.to.to_rfc3339()),
        ]
    }
}

/// Stats shown on the seller dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerDashboard {
    pub total_revenue: f64,
    pub order_count: u64,
    pub pending_order_count: u64,
    pub product_count: u64,
    pub out_of_stock_count: u64,
    pub average_rating: f64,
}

impl EmptyState for SellerDashboard {
    fn empty() -> Self {
        Self {
            total_revenue: 0.0,
            order_count: 0,
            pending_order_count: 0,
            product_count: 0,
            out_of_stock_count: 0,
            average_rating: 0.0,
        }
    }
}

/// Stats shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub total_revenue: f64,
    pub order_count: u64,
    pub customer_count: u64,
    pub seller_count: u64,
    pub pending_seller_count: u64,
}

impl EmptyState for AdminDashboard {
    fn empty() -> Self {
        Self {
            total_revenue: 0.0,
            order_count: 0,
            customer_count: 0,
            seller_count: 0,
            pending_seller_count: 0,
        }
    }
}
