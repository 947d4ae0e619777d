use serde::Deserialize;

use crate::domain::TeamProfile;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub api_keys: ApiKeyConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub team: TeamProfile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// API key generation settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeyConfig {
    /// Prefix prepended to every generated secret
    #[serde(default = "default_key_prefix")]
    pub prefix: String,
    /// Number of random bytes in a secret
    #[serde(default = "default_key_bytes")]
    pub key_bytes: usize,
    #[serde(default)]
    pub hashing: HashingConfig,
}

/// Argon2id cost parameters used when hashing secrets
///
/// The defaults match the argon2 crate defaults (19 MiB, 2 passes), which
/// cost roughly as much as bcrypt at cost 10.
#[derive(Debug, Clone, Deserialize)]
pub struct HashingConfig {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

/// Prometheus metrics configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Static asset locations
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_key_prefix() -> String {
    "ak_".to_string()
}

fn default_key_bytes() -> usize {
    32
}

fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_images_dir() -> String {
    "images".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            prefix: default_key_prefix(),
            key_bytes: default_key_bytes(),
            hashing: HashingConfig::default(),
        }
    }
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.api_keys.prefix, "ak_");
        assert_eq!(config.api_keys.key_bytes, 32);
        assert_eq!(config.api_keys.hashing.memory_kib, 19 * 1024);
        assert_eq!(config.api_keys.hashing.iterations, 2);
        assert!(config.metrics.enabled);
        assert_eq!(config.assets.images_dir, "images");
        assert_eq!(config.team.name, "MONA");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"server": {"port": 9000}, "api_keys": {"hashing": {"iterations": 3}}, "logging": {"format": "json"}}"#,
        )
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.api_keys.hashing.iterations, 3);
        assert_eq!(config.api_keys.hashing.parallelism, 1);
        assert!(matches!(config.logging.format, LogFormat::Json));
    }
}
