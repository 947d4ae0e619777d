//! API Key generation
//!
//! Generates cryptographically secure API key secrets.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;

use crate::config::ApiKeyConfig;
use crate::domain::{ApiKey, DomainError};

/// Smallest accepted amount of randomness in a secret
pub const MIN_KEY_BYTES: usize = 16;

/// Result of generating a new API key secret
#[derive(Debug, Clone)]
pub struct GeneratedSecret {
    /// The full secret (only shown once at creation)
    pub secret: String,
    /// Trailing characters kept for identification
    pub preview: String,
}

/// Generator for secure API key secrets
#[derive(Debug, Clone)]
pub struct ApiKeyGenerator {
    /// Prefix for all generated secrets (e.g., "ak_")
    prefix: String,
    /// Number of random bytes to generate
    key_bytes: usize,
}

impl ApiKeyGenerator {
    /// Create a new API key generator
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            key_bytes: 32,
        }
    }

    /// Create a generator from configuration
    ///
    /// Fails when the configured secret would carry fewer than
    /// [`MIN_KEY_BYTES`] random bytes.
    pub fn from_config(config: &ApiKeyConfig) -> Result<Self, DomainError> {
        if config.key_bytes < MIN_KEY_BYTES {
            return Err(DomainError::configuration(format!(
                "api_keys.key_bytes must be at least {}, got {}",
                MIN_KEY_BYTES, config.key_bytes
            )));
        }

        Ok(Self::new(config.prefix.clone()).with_key_bytes(config.key_bytes))
    }

    /// Set the number of random bytes
    pub fn with_key_bytes(mut self, bytes: usize) -> Self {
        self.key_bytes = bytes;
        self
    }

    /// Generate a new secret
    pub fn generate(&self) -> GeneratedSecret {
        let mut random_bytes = vec![0u8; self.key_bytes];
        rand::thread_rng().fill_bytes(&mut random_bytes);

        let secret = format!("{}{}", self.prefix, URL_SAFE_NO_PAD.encode(&random_bytes));
        let preview = ApiKey::preview_of(&secret);

        GeneratedSecret { secret, preview }
    }
}

impl Default for ApiKeyGenerator {
    fn default() -> Self {
        let config = ApiKeyConfig::default();
        Self::new(config.prefix).with_key_bytes(config.key_bytes)
    }
}
