//! Image loader trait

use async_trait::async_trait;

use super::entity::{MemberImage, TeamMember};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Loads member portraits as base64 payloads
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageLoader: Send + Sync {
    /// Load the portrait of every member, in member order.
    ///
    /// Members whose image does not exist are skipped. Any other read
    /// failure aborts the whole load.
    async fn load(&self, members: &[TeamMember]) -> Result<Vec<MemberImage>, DomainError>;
}
