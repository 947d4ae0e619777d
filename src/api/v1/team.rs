//! Team information handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionResponse {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResponse {
    pub team: TeamInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSizeResponse {
    pub size: usize,
}

/// GET /api/v1/description
pub async fn get_description(State(state): State<AppState>) -> Json<DescriptionResponse> {
    Json(DescriptionResponse {
        description: state.team.description.clone(),
    })
}

/// GET /api/v1/team
pub async fn get_team(State(state): State<AppState>) -> Json<TeamResponse> {
    Json(TeamResponse {
        team: TeamInfo {
            name: state.team.name.clone(),
            members: state.team.member_names(),
        },
    })
}

/// GET /api/v1/teamsize
pub async fn get_team_size(State(state): State<AppState>) -> Json<TeamSizeResponse> {
    Json(TeamSizeResponse {
        size: state.team.size(),
    })
}
