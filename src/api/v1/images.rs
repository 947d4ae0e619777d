//! Team image handler

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::MemberImage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub images: Vec<MemberImage>,
}

/// GET /api/v1/images
pub async fn list_images(State(state): State<AppState>) -> Result<Json<ImagesResponse>, ApiError> {
    let images = state
        .image_loader
        .load(&state.team.members)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to load team images");
            ApiError::internal("Failed to load images")
        })?;

    debug!(count = images.len(), "Loaded team images");

    Ok(Json(ImagesResponse { images }))
}
