//! Custom JSON extractor that returns errors as JSON

use axum::{
    Json as AxumJson,
    extract::{FromRequest, OptionalFromRequest, Request, rejection::JsonRejection as AxumJsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use super::error::ApiErrorResponse;

/// Custom JSON extractor that converts all rejection errors to JSON format
///
/// As `Option<Json<T>>` it yields `None` when the request carries no
/// `Content-Type` header, so bodiless requests fall back to defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// JSON rejection error that returns API error format
#[derive(Debug)]
pub struct JsonRejection {
    status: StatusCode,
    message: String,
}

impl From<AxumJsonRejection> for JsonRejection {
    fn from(rejection: AxumJsonRejection) -> Self {
        // Well-formed JSON of the wrong shape is still a bad request
        let status = match &rejection {
            AxumJsonRejection::JsonDataError(_) => StatusCode::BAD_REQUEST,
            _ => rejection.status(),
        };

        Self {
            status,
            message: format_rejection_message(&rejection),
        }
    }
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        let response = ApiErrorResponse {
            error: self.message,
        };

        (self.status, AxumJson(response)).into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let AxumJson(value) = <AxumJson<T> as FromRequest<S>>::from_request(req, state).await?;
        Ok(Json(value))
    }
}

impl<S, T> OptionalFromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let value = <AxumJson<T> as OptionalFromRequest<S>>::from_request(req, state).await?;
        Ok(value.map(|AxumJson(value)| Json(value)))
    }
}

/// Format the rejection message to be more user-friendly
fn format_rejection_message(rejection: &AxumJsonRejection) -> String {
    use axum::extract::rejection::JsonRejection::*;

    match rejection {
        JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
        MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        BytesRejection(err) => format!("Failed to read request body: {}", err.body_text()),
        _ => "Invalid JSON request".to_string(),
    }
}
