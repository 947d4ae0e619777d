//! Filesystem-backed image loader

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::debug;

use crate::domain::{DomainError, ImageLoader, MemberImage, TeamMember};

/// Reads member portraits from a directory on disk
#[derive(Debug, Clone)]
pub struct FsImageLoader {
    images_dir: PathBuf,
}

impl FsImageLoader {
    pub fn new(images_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: images_dir.into(),
        }
    }
}

#[async_trait]
impl ImageLoader for FsImageLoader {
    async fn load(&self, members: &[TeamMember]) -> Result<Vec<MemberImage>, DomainError> {
        let mut images = Vec::with_capacity(members.len());

        for member in members {
            let path = self.images_dir.join(&member.image);

            match tokio::fs::read(&path).await {
                Ok(bytes) => images.push(MemberImage {
                    name: member.name.clone(),
                    data: STANDARD.encode(bytes),
                }),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(member = %member.name, path = %path.display(), "Image not found, skipping");
                }
                Err(e) => {
                    return Err(DomainError::storage(format!(
                        "Failed to read image '{}': {}",
                        path.display(),
                        e
                    )));
                }
            }
        }

        Ok(images)
    }
}
