//! Shared REST plumbing.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Decode a JSON response, turning any non-success status into an
/// [`ApiError::Status`] that keeps the service's diagnostic body.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    service: &'static str,
) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { service, status, body });
    }
    Ok(response.json().await?)
}
