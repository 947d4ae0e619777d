//! API Key repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{ApiKey, ApiKeyId};
use crate::domain::DomainError;

/// Repository trait for API key storage
///
/// Implementations keep records in insertion order.
#[async_trait]
pub trait ApiKeyRepository: Send + Sync + Debug {
    /// Append a new API key
    async fn create(&self, api_key: ApiKey) -> Result<ApiKey, DomainError>;

    /// List all API keys in insertion order
    async fn list(&self) -> Result<Vec<ApiKey>, DomainError>;

    /// Delete an API key, returning whether a record was removed
    async fn delete(&self, id: &ApiKeyId) -> Result<bool, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock API key repository for testing
    #[derive(Debug, Default)]
    pub struct MockApiKeyRepository {
        keys: Arc<RwLock<Vec<ApiKey>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockApiKeyRepository {
        /// Create a new mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ApiKeyRepository for MockApiKeyRepository {
        async fn create(&self, api_key: ApiKey) -> Result<ApiKey, DomainError> {
            self.check_should_fail().await?;
            self.keys.write().await.push(api_key.clone());
            Ok(api_key)
        }

        async fn list(&self) -> Result<Vec<ApiKey>, DomainError> {
            self.check_should_fail().await?;
            Ok(self.keys.read().await.clone())
        }

        async fn delete(&self, id: &ApiKeyId) -> Result<bool, DomainError> {
            self.check_should_fail().await?;
            let mut keys = self.keys.write().await;
            let before = keys.len();
            keys.retain(|k| k.id() != id);
            Ok(keys.len() != before)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn create_test_key(id: &str) -> ApiKey {
            ApiKey::new(ApiKeyId::new(id), "hash", "abcd")
        }

        #[tokio::test]
        async fn test_create_and_list() {
            let repo = MockApiKeyRepository::new();

            repo.create(create_test_key("key-1")).await.unwrap();
            repo.create(create_test_key("key-2")).await.unwrap();

            let keys = repo.list().await.unwrap();
            assert_eq!(keys.len(), 2);
        }

        #[tokio::test]
        async fn test_delete() {
            let repo = MockApiKeyRepository::new();
            repo.create(create_test_key("key-1")).await.unwrap();

            assert!(repo.delete(&ApiKeyId::new("key-1")).await.unwrap());
            assert!(!repo.delete(&ApiKeyId::new("key-1")).await.unwrap());
        }

        #[tokio::test]
        async fn test_should_fail() {
            let repo = MockApiKeyRepository::new();
            repo.set_should_fail(true).await;

            assert!(repo.list().await.is_err());
            assert!(repo.create(create_test_key("key-1")).await.is_err());
        }
    }
}
