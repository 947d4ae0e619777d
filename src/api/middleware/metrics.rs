//! HTTP metrics middleware for recording request/response metrics

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};

use crate::infrastructure::observability::record_http_request;

/// Label used for requests that matched no route
const UNMATCHED_PATH: &str = "unmatched";

/// Middleware to record HTTP request metrics
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);

    let response = next.run(request).await;

    record_http_request(
        method.as_str(),
        &path,
        response.status().as_u16(),
        start.elapsed(),
    );

    response
}

fn extract_path(request: &Request<Body>) -> String {
    // The route template keeps label cardinality bounded
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_request_path_label() {
        let request = Request::builder()
            .uri("/api-keys/123e4567")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract_path(&request), UNMATCHED_PATH);
    }
}
