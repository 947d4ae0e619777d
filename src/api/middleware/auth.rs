//! API key gate middleware
//!
//! Every request except key issuance must carry a valid key in the
//! `x-api-key` header. Rejection happens before any handler runs and is
//! uniform: a missing key and an unknown key produce the same response.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Header carrying the plaintext API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Paths reachable without an API key
pub const PUBLIC_PATHS: &[&str] = &["/generate-key"];

/// Body message for every authentication failure
pub const AUTH_FAILURE_MESSAGE: &str = "Invalid or missing API key";

/// Middleware that authorizes requests against the key store
pub async fn api_key_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path().to_string();

    if is_public_path(&path) {
        debug!(path = %path, "Public path, skipping API key check");
        return Ok(next.run(request).await);
    }

    let candidate = extract_api_key(request.headers()).map(str::to_owned);
    let authorized = state
        .api_key_service
        .validate(candidate.as_deref())
        .await
        .map_err(ApiError::from)?;

    if !authorized {
        warn!(
            path = %path,
            key_present = candidate.is_some(),
            "Rejected request with invalid or missing API key"
        );
        return Err(ApiError::unauthorized(AUTH_FAILURE_MESSAGE));
    }

    Ok(next.run(request).await)
}

fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Read the candidate key; values that are not valid header text count as absent
fn extract_api_key(headers: &HeaderMap) -> Option<&str> {
    headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok())
}
