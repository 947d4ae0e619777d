//! API Key entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of trailing secret characters kept for display
pub const PREVIEW_LEN: usize = 4;

/// API key record identifier, independent of the secret
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKeyId(String);

impl ApiKeyId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApiKeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored API key record
///
/// The plaintext secret is never part of the record. Only the salted hash
/// and the last [`PREVIEW_LEN`] characters are kept. The record is not
/// serializable; use [`ApiKeySummary`] for anything leaving the process.
#[derive(Debug, Clone)]
pub struct ApiKey {
    id: ApiKeyId,
    /// PHC-formatted hash of the secret
    secret_hash: String,
    preview: String,
    name: Option<String>,
    created_at: DateTime<Utc>,
}

impl ApiKey {
    /// Create a new record stamped with the current time
    pub fn new(id: ApiKeyId, secret_hash: impl Into<String>, preview: impl Into<String>) -> Self {
        Self {
            id,
            secret_hash: secret_hash.into(),
            preview: preview.into(),
            name: None,
            created_at: Utc::now(),
        }
    }

    /// Set the optional display name
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Derive the display preview from a plaintext secret
    pub fn preview_of(secret: &str) -> String {
        let count = secret.chars().count();
        secret
            .chars()
            .skip(count.saturating_sub(PREVIEW_LEN))
            .collect()
    }

    pub fn id(&self) -> &ApiKeyId {
        &self.id
    }

    pub fn secret_hash(&self) -> &str {
        &self.secret_hash
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Non-secret view of this record
    pub fn summary(&self) -> ApiKeySummary {
        ApiKeySummary {
            id: self.id.clone(),
            preview: self.preview.clone(),
            created_at: self.created_at,
            name: self.name.clone(),
        }
    }
}

/// Public metadata of an API key, safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeySummary {
    pub id: ApiKeyId,
    pub preview: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
