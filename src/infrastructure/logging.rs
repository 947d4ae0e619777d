use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingConfig};

/// Level used when neither `RUST_LOG` nor the configured level parses
pub const FALLBACK_LOG_LEVEL: &str = "info";

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env_directives.as_deref(), &config.level);

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty().with_target(true))
                .init();
        }
    }

    tracing::info!(level = %config.level, format = ?config.format, "Logging initialized");
}

/// Pick the first usable filter: env directives, configured level, fallback
fn build_filter(env_directives: Option<&str>, configured_level: &str) -> EnvFilter {
    env_directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(configured_level).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_LOG_LEVEL))
}
