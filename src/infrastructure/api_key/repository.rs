//! In-memory API key repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::DomainError;
use crate::domain::api_key::{ApiKey, ApiKeyId, ApiKeyRepository};

/// In-memory implementation of ApiKeyRepository
///
/// Records live for the lifetime of the process, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApiKeyRepository {
    keys: Arc<RwLock<Vec<ApiKey>>>,
}

impl InMemoryApiKeyRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApiKeyRepository for InMemoryApiKeyRepository {
    async fn create(&self, api_key: ApiKey) -> Result<ApiKey, DomainError> {
        let mut keys = self.keys.write().await;
        keys.push(api_key.clone());
        Ok(api_key)
    }

    async fn list(&self) -> Result<Vec<ApiKey>, DomainError> {
        let keys = self.keys.read().await;
        Ok(keys.clone())
    }

    async fn delete(&self, id: &ApiKeyId) -> Result<bool, DomainError> {
        let mut keys = self.keys.write().await;

        match keys.iter().position(|k| k.id() == id) {
            Some(index) => {
                keys.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
