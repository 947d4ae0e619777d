//! HTTP error type

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::DomainError;

/// Generic message returned for internal failures
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error body: `{"error": "<message>"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: message.into(),
            },
        }
    }

    /// Authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn message(&self) -> &str {
        &self.response.error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Configuration { .. }
            | DomainError::Internal { .. }
            | DomainError::Storage { .. } => {
                error!(error = %err, "Request failed with internal error");
                Self::internal(INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.response.error)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::unauthorized("Invalid or missing API key");
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "Invalid or missing API key");
    }

    #[test]
    fn test_error_body_shape() {
        let err = ApiError::not_found("API key not found");
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(json, serde_json::json!({"error": "API key not found"}));
    }

    #[test]
    fn test_domain_not_found_conversion() {
        let api_err: ApiError = DomainError::not_found("API key not found").into();
        assert_eq!(api_err.status, StatusCode::NOT_FOUND);
        assert_eq!(api_err.message(), "API key not found");
    }

    #[test]
    fn test_internal_errors_are_generic() {
        let api_err: ApiError = DomainError::storage("disk path /secret/x unreadable").into();
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.message(), INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::unauthorized("nope").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
