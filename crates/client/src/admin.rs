//! Admin management endpoints. All of them require an admin session.

use souk_core::admin::{AccountStatus, AdminCustomer, AdminSeller, UpdateAccountStatusRequest};
use souk_core::page::{Page, PageQuery};
use souk_core::Envelope;

use crate::error::ClientError;
use crate::http::ApiClient;

/// Fetch a page of customer accounts.
///
/// `GET /admin/customers`.
pub async fn list_customers(
    api: &ApiClient,
    query: &PageQuery,
) -> Result<Envelope<Page<AdminCustomer>>, ClientError> {
    api.get("/admin/customers", &query.to_query_pairs()).await
}

/// Fetch one customer account.
///
/// `GET /admin/customers/{id}`.
pub async fn get_customer(
    api: &ApiClient,
    id: &str,
) -> Result<Envelope<AdminCustomer>, ClientError> {
    api.get(&format!("/admin/customers/{id}"), &[]).await
}

/// Suspend or reactivate a customer account.
///
/// `PUT /admin/customers/{id}/status`.
pub async fn update_customer_status(
    api: &ApiClient,
    id: &str,
    status: AccountStatus,
) -> Result<Envelope<AdminCustomer>, ClientError> {
    let request = UpdateAccountStatusRequest { status };
    api.put(&format!("/admin/customers/{id}/status"), &request)
        .await
}

/// Fetch a page of seller accounts.
///
/// `GET /admin/sellers`.
pub async fn list_sellers(
    api: &ApiClient,
    query: &PageQuery,
) -> Result<Envelope<Page<AdminSeller>>, ClientError> {
    api.get("/admin/sellers", &query.to_query_pairs()).await
}

/// Fetch one seller account.
///
/// `GET /admin/sellers/{id}`.
pub async fn get_seller(api: &ApiClient, id: &str) -> Result<Envelope<AdminSeller>, ClientError> {
    api.get(&format!("/admin/sellers/{id}"), &[]).await
}

/// Approve, suspend, or reactivate a seller account.
///
/// `PUT /admin/sellers/{id}/status`.
pub async fn update_seller_status(
    api: &ApiClient,
    id: &str,
    status: AccountStatus,
) -> Result<Envelope<AdminSeller>, ClientError> {
    let request = UpdateAccountStatusRequest { status };
    api.put(&format!("/admin/sellers/{id}/status"), &request)
        .await
}
