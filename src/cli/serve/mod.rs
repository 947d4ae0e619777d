//! Serve command - runs the API server

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::create_router;
use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::observability::init_metrics;

/// Run the API server
pub async fn run() -> anyhow::Result<()> {
    let config = load_config();

    let state = crate::create_app_state_with_config(&config)?;
    let metrics = init_metrics(&config.metrics);
    let app = create_router(state, metrics);

    let addr = build_socket_addr(&config)?;
    info!("Starting API server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server shutdown complete");

    Ok(())
}

/// Load configuration and start logging; falls back to defaults on error
pub(crate) fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();

    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    logging::init_logging(&config.logging);

    if let Some(e) = load_error {
        warn!("Failed to load configuration, using defaults: {}", e);
    }

    config
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

pub(crate) fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    socket_addr(&config.server.host, config.server.port)
}

pub(crate) fn socket_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((host.parse::<std::net::IpAddr>()?, port)))
}
