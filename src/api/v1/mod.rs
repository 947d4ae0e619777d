//! Informational v1 API endpoints

pub mod images;
pub mod team;

use axum::{Router, routing::get};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/description", get(team::get_description))
        .route("/team", get(team::get_team))
        .route("/teamsize", get(team::get_team_size))
        .route("/images", get(images::list_images))
}
