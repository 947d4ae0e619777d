use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::hello;
use super::keys;
use super::middleware::{api_key_gate, logging_middleware, metrics_middleware};
use super::state::AppState;
use super::v1;
use crate::infrastructure::observability::{PrometheusMetrics, create_metrics_router};

/// Create the full API router
///
/// Every route, `/metrics` included, sits behind the API key gate; only
/// `/generate-key` is let through without a key. CORS is outermost so that
/// browser preflights never reach the gate.
pub fn create_router(state: AppState, metrics: Option<PrometheusMetrics>) -> Router {
    let mut router = Router::new()
        // Key issuance (public)
        .route("/generate-key", post(keys::generate_key))
        // Key directory
        .route("/api-keys", get(keys::list_api_keys))
        .route("/api-keys/{id}", delete(keys::delete_api_key))
        // Informational endpoints
        .route("/hello", get(hello::hello))
        .nest("/api/v1", v1::create_v1_router())
        .with_state(state.clone());

    if let Some(m) = metrics {
        router = router.merge(create_metrics_router(m));
    }

    router
        .layer(middleware::from_fn_with_state(state, api_key_gate))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
