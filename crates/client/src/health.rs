//! Backend health probe.

use serde::Deserialize;

use crate::error::ClientError;
use crate::http::ApiClient;

/// Response of the backend health endpoint.
///
/// This endpoint predates the `{code, result}` envelope and returns a
/// bare object.
#[derive(Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Check backend liveness.
///
/// `GET /health`.
pub async fn check(api: &ApiClient) -> Result<HealthStatus, ClientError> {
    api.get_raw("/health").await
}
