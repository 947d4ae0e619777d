//! Domain layer - Core entities, traits and errors

pub mod api_key;
pub mod error;
pub mod team;

pub use api_key::{ApiKey, ApiKeyId, ApiKeyRepository, ApiKeySummary};
pub use error::DomainError;
pub use team::{ImageLoader, MemberImage, TeamMember, TeamProfile};
