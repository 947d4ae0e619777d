//! Application configuration

mod app_config;

pub use app_config::{
    ApiKeyConfig, AppConfig, AssetsConfig, HashingConfig, LogFormat, LoggingConfig, MetricsConfig,
    ServerConfig,
};
