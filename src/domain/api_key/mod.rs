//! API Key domain
//!
//! Types and traits for the hashed API key lifecycle: issued keys are kept
//! only as salted hashes plus non-secret metadata.

mod entity;
mod repository;

pub use entity::{ApiKey, ApiKeyId, ApiKeySummary, PREVIEW_LEN};
pub use repository::ApiKeyRepository;

#[cfg(test)]
pub use repository::mock::MockApiKeyRepository;
