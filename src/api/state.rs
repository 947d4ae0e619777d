//! Application state for shared services

use std::sync::Arc;

use crate::domain::api_key::{ApiKeyId, ApiKeyRepository, ApiKeySummary};
use crate::domain::{DomainError, ImageLoader, TeamProfile};
use crate::infrastructure::api_key::{ApiKeyService, IssuedApiKey};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub api_key_service: Arc<dyn ApiKeyServiceTrait>,
    pub image_loader: Arc<dyn ImageLoader>,
    pub team: Arc<TeamProfile>,
}

/// Trait for API key service operations
#[async_trait::async_trait]
pub trait ApiKeyServiceTrait: Send + Sync {
    async fn issue(&self, name: Option<String>) -> Result<IssuedApiKey, DomainError>;
    async fn validate(&self, candidate: Option<&str>) -> Result<bool, DomainError>;
    async fn list(&self) -> Result<Vec<ApiKeySummary>, DomainError>;
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}

#[async_trait::async_trait]
impl<R: ApiKeyRepository + 'static> ApiKeyServiceTrait for ApiKeyService<R> {
    async fn issue(&self, name: Option<String>) -> Result<IssuedApiKey, DomainError> {
        ApiKeyService::issue(self, name).await
    }

    async fn validate(&self, candidate: Option<&str>) -> Result<bool, DomainError> {
        ApiKeyService::validate(self, candidate).await
    }

    async fn list(&self) -> Result<Vec<ApiKeySummary>, DomainError> {
        ApiKeyService::list(self).await
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        ApiKeyService::delete(self, &ApiKeyId::new(id)).await
    }
}

impl AppState {
    pub fn new(
        api_key_service: Arc<dyn ApiKeyServiceTrait>,
        image_loader: Arc<dyn ImageLoader>,
        team: TeamProfile,
    ) -> Self {
        Self {
            api_key_service,
            image_loader,
            team: Arc::new(team),
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use crate::infrastructure::api_key::{InMemoryApiKeyRepository, test_hasher};
    use crate::infrastructure::assets::FsImageLoader;

    /// State backed by a fresh in-memory store and cheap hashing
    pub fn test_state() -> AppState {
        test_state_with_loader(Arc::new(FsImageLoader::new("/nonexistent/keyvault/images")))
    }

    pub fn test_state_with_loader(image_loader: Arc<dyn ImageLoader>) -> AppState {
        build(Arc::new(InMemoryApiKeyRepository::new()), image_loader)
    }

    /// State over a caller-supplied key store
    pub fn test_state_with_repository<R: ApiKeyRepository + 'static>(
        repository: Arc<R>,
    ) -> AppState {
        build(
            repository,
            Arc::new(FsImageLoader::new("/nonexistent/keyvault/images")),
        )
    }

    fn build<R: ApiKeyRepository + 'static>(
        repository: Arc<R>,
        image_loader: Arc<dyn ImageLoader>,
    ) -> AppState {
        let service = ApiKeyService::new(repository, Arc::new(test_hasher()));

        AppState::new(Arc::new(service), image_loader, TeamProfile::default())
    }
}
