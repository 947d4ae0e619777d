//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::config::MetricsConfig;

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl From<PrometheusHandle> for PrometheusMetrics {
    fn from(handle: PrometheusHandle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("keyvault_api_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

            tracing::info!("Prometheus metrics initialized at /metrics");

            Some(PrometheusMetrics::from(handle))
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Outcome of checking a candidate API key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Missing,
    Accepted,
    Rejected,
}

impl ValidationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

pub fn record_validation(outcome: ValidationOutcome) {
    counter!("api_key_validations_total", "outcome" => outcome.as_str()).increment(1);
}

pub fn record_api_key_issued() {
    counter!("api_keys_issued_total").increment(1);
}

pub fn record_api_key_deleted() {
    counter!("api_keys_deleted_total").increment(1);
}
