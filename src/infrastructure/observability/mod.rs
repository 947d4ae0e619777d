//! Observability infrastructure - Prometheus metrics

mod metrics;

pub use metrics::{
    PrometheusMetrics, ValidationOutcome, create_metrics_router, init_metrics,
    record_api_key_deleted, record_api_key_issued, record_http_request, record_validation,
};
