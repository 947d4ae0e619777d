//! UI command - serves the static browser UI

use std::path::PathBuf;

use axum::Router;
use clap::Args;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::serve::{load_config, socket_addr};

/// Arguments for the UI command
#[derive(Args, Clone)]
pub struct UiArgs {
    /// Port to serve the UI on
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// Directory holding the UI assets
    #[arg(long, default_value = "public")]
    pub dir: PathBuf,
}

/// Run the UI server
pub async fn run(args: UiArgs) -> anyhow::Result<()> {
    let config = load_config();

    let app = create_ui_router(&args);
    let addr = socket_addr(&config.server.host, args.port)?;

    info!(
        "Starting UI server on {} (serving {})",
        addr,
        args.dir.display()
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Static files with `index.html` as fallback
fn create_ui_router(args: &UiArgs) -> Router {
    let index = args.dir.join("index.html");

    Router::new()
        .fallback_service(ServeDir::new(&args.dir).fallback(ServeFile::new(index)))
        .layer(TraceLayer::new_for_http())
}
