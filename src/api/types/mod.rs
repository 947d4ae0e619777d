//! HTTP request/response types shared across handlers

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
