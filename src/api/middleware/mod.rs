//! API middleware components

pub mod auth;
pub mod logging;
pub mod metrics;

pub use auth::{API_KEY_HEADER, AUTH_FAILURE_MESSAGE, api_key_gate};
pub use logging::logging_middleware;
pub use metrics::metrics_middleware;
