//! Keyvault API
//!
//! A small HTTP service that issues API keys, stores only their salted
//! hashes in memory, and gates every other endpoint on a valid key:
//! - One-time plaintext disclosure at issuance
//! - Argon2id hashing off the async workers
//! - Key listing and deletion by record id
//! - Static team information endpoints behind the gate

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{
    api_key::{ApiKeyGenerator, ApiKeyService, Argon2SecretHasher, InMemoryApiKeyRepository},
    assets::FsImageLoader,
};
use tracing::info;

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let hasher = Argon2SecretHasher::new(&config.api_keys.hashing)?;
    let generator = ApiKeyGenerator::from_config(&config.api_keys)?;
    let api_key_service = ApiKeyService::new(
        Arc::new(InMemoryApiKeyRepository::new()),
        Arc::new(hasher),
    )
    .with_generator(generator);

    info!(
        memory_kib = config.api_keys.hashing.memory_kib,
        iterations = config.api_keys.hashing.iterations,
        parallelism = config.api_keys.hashing.parallelism,
        "API key store initialized (in-memory)"
    );

    let image_loader = FsImageLoader::new(&config.assets.images_dir);
    info!(images_dir = %config.assets.images_dir, members = config.team.size(), "Team profile loaded");

    Ok(AppState::new(
        Arc::new(api_key_service),
        Arc::new(image_loader),
        config.team.clone(),
    ))
}
