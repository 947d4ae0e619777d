//! API Key infrastructure implementations
//!
//! Secret generation, hashing, in-memory storage and the service tying
//! them together.

mod generator;
mod hasher;
mod repository;
mod service;

pub use generator::{ApiKeyGenerator, GeneratedSecret};
pub use hasher::{Argon2SecretHasher, SecretHasher};
pub use repository::InMemoryApiKeyRepository;
pub use service::{ApiKeyService, IssuedApiKey};

#[cfg(test)]
pub use hasher::test_hasher;
