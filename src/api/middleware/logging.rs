//! Request/response logging middleware with header redaction

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

/// Middleware to log HTTP requests and responses.
/// Span creation is left to `TraceLayer`; this only emits events.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = extract_request_id(&request);
    let headers_log = redact_headers(request.headers());

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        headers = %headers_log,
        "Incoming request"
    );

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = %response.status().as_u16(),
        duration_ms = %start.elapsed().as_millis(),
        request_id = %request_id,
        "Request completed"
    );

    response
}

fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn extract_request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Render loggable headers, redacting credentials
fn redact_headers(headers: &HeaderMap) -> String {
    let mut parts = Vec::new();

    for (name, value) in headers {
        let name_str = name.as_str().to_lowercase();

        if !should_log_header(&name_str) {
            continue;
        }

        let value_str = if is_sensitive_header(&name_str) {
            "[REDACTED]"
        } else {
            value.to_str().unwrap_or("[invalid]")
        };

        parts.push(format!("{}={}", name_str, value_str));
    }

    parts.join(", ")
}

/// Check if a header contains sensitive information
fn is_sensitive_header(name: &str) -> bool {
    matches!(
        name,
        "authorization" | "x-api-key" | "cookie" | "set-cookie" | "proxy-authorization"
    )
}

/// Check if a header should be logged
fn should_log_header(name: &str) -> bool {
    matches!(
        name,
        "content-type"
            | "content-length"
            | "accept"
            | "origin"
            | "user-agent"
            | "x-request-id"
            | "x-forwarded-for"
            | "x-real-ip"
            | "x-api-key"
    )
}
