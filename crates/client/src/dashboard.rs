//! Dashboard stat endpoints.

use souk_core::dashboard::{AdminDashboard, SellerDashboard, StatRange};
use souk_core::Envelope;

use crate::error::ClientError;
use crate::http::ApiClient;

/// Fetch the seller dashboard stat block for a date range.
///
/// `GET /seller/dashboard?from=&to=`. Requires a seller session.
/// Answers `result: null` for sellers with no activity in the range.
pub async fn seller_stats(
    api: &ApiClient,
    range: &StatRange,
) -> Result<Envelope<SellerDashboard>, ClientError> {
    api.get("/seller/dashboard", &range.to_query_pairs()).await
}

/// Fetch the admin dashboard stat block for a date range.
///
/// `GET /admin/dashboard?from=&to=`. Requires an admin session.
pub async fn admin_stats(
    api: &ApiClient,
    range: &StatRange,
) -> Result<Envelope<AdminDashboard>, ClientError> {
    api.get("/admin/dashboard", &range.to_query_pairs()).await
}
