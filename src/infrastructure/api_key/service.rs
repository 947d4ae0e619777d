//! API Key service
//!
//! Issues, validates, lists and deletes hashed API keys.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::DomainError;
use crate::domain::api_key::{ApiKey, ApiKeyId, ApiKeyRepository, ApiKeySummary};
use crate::infrastructure::observability::{
    ValidationOutcome, record_api_key_deleted, record_api_key_issued, record_validation,
};

use super::generator::ApiKeyGenerator;
use super::hasher::SecretHasher;

/// Result of issuing a new API key
#[derive(Debug, Clone)]
pub struct IssuedApiKey {
    /// The plaintext secret (only returned once)
    pub secret: String,
    /// Public metadata of the stored record
    pub api_key: ApiKeySummary,
}

/// API Key service for managing API keys
pub struct ApiKeyService<R>
where
    R: ApiKeyRepository,
{
    repository: Arc<R>,
    generator: ApiKeyGenerator,
    hasher: Arc<dyn SecretHasher>,
}

impl<R: ApiKeyRepository> ApiKeyService<R> {
    /// Create a new API key service
    pub fn new(repository: Arc<R>, hasher: Arc<dyn SecretHasher>) -> Self {
        Self {
            repository,
            generator: ApiKeyGenerator::default(),
            hasher,
        }
    }

    /// Create with a custom generator
    pub fn with_generator(mut self, generator: ApiKeyGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Issue a new API key
    ///
    /// Only the hash and the preview are stored. The plaintext secret in the
    /// result is the one and only copy.
    pub async fn issue(&self, name: Option<String>) -> Result<IssuedApiKey, DomainError> {
        let generated = self.generator.generate();

        let hasher = Arc::clone(&self.hasher);
        let secret = generated.secret.clone();
        let secret_hash = tokio::task::spawn_blocking(move || hasher.hash(&secret))
            .await
            .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))??;

        let api_key =
            ApiKey::new(ApiKeyId::generate(), secret_hash, generated.preview).with_name(name);
        let created = self.repository.create(api_key).await?;

        record_api_key_issued();
        info!(
            id = %created.id(),
            preview = %created.preview(),
            "API key issued"
        );

        Ok(IssuedApiKey {
            secret: generated.secret,
            api_key: created.summary(),
        })
    }

    /// Check a candidate secret against every stored hash
    ///
    /// Linear in the number of live keys: salted hashes cannot be looked up
    /// by plaintext.
    pub async fn validate(&self, candidate: Option<&str>) -> Result<bool, DomainError> {
        let candidate = match candidate {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => {
                record_validation(ValidationOutcome::Missing);
                return Ok(false);
            }
        };

        let hashes: Vec<String> = self
            .repository
            .list()
            .await?
            .iter()
            .map(|k| k.secret_hash().to_string())
            .collect();

        debug!(candidates = hashes.len(), "Validating API key");

        let hasher = Arc::clone(&self.hasher);
        let matched = tokio::task::spawn_blocking(move || {
            hashes.iter().any(|hash| hasher.verify(&candidate, hash))
        })
        .await
        .map_err(|e| DomainError::internal(format!("Verification task failed: {}", e)))?;

        record_validation(if matched {
            ValidationOutcome::Accepted
        } else {
            ValidationOutcome::Rejected
        });

        Ok(matched)
    }

    /// List public metadata of all keys, in issuance order
    pub async fn list(&self) -> Result<Vec<ApiKeySummary>, DomainError> {
        let keys = self.repository.list().await?;
        Ok(keys.iter().map(ApiKey::summary).collect())
    }

    /// Delete an API key, returning whether it existed
    pub async fn delete(&self, id: &ApiKeyId) -> Result<bool, DomainError> {
        let deleted = self.repository.delete(id).await?;

        if deleted {
            record_api_key_deleted();
            info!(id = %id, "API key deleted");
        } else {
            debug!(id = %id, "API key not found for deletion");
        }

        Ok(deleted)
    }
}
