//! Profile endpoints.

use souk_core::profile::{Profile, UpdateProfileRequest};
use souk_core::{CoreError, Envelope};
use validator::Validate;

use crate::error::ClientError;
use crate::http::ApiClient;

/// Fetch the signed-in user's profile.
///
/// `GET /profiles/me`.
pub async fn get_profile(api: &ApiClient) -> Result<Envelope<Profile>, ClientError> {
    api.get("/profiles/me", &[]).await
}

/// Update the signed-in user's profile.
///
/// `PUT /profiles/me`. The payload is validated locally first.
pub async fn update_profile(
    api: &ApiClient,
    request: &UpdateProfileRequest,
) -> Result<Envelope<Profile>, ClientError> {
    request.validate().map_err(CoreError::from)?;
    api.put("/profiles/me", request).await
}
