//! API key issuance and management endpoints

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json as JsonBody};
use crate::domain::ApiKeySummary;

/// Request to issue a new API key
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateKeyRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Newly issued key; the only response that ever carries the secret
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateKeyResponse {
    pub api_key: String,
    #[serde(flatten)]
    pub key: ApiKeySummary,
}

/// List API keys response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListApiKeysResponse {
    pub keys: Vec<ApiKeySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /generate-key
pub async fn generate_key(
    State(state): State<AppState>,
    body: Option<JsonBody<GenerateKeyRequest>>,
) -> Result<Json<GenerateKeyResponse>, ApiError> {
    let request = body.map(JsonBody::into_inner).unwrap_or_default();

    let issued = state.api_key_service.issue(request.name).await?;

    Ok(Json(GenerateKeyResponse {
        api_key: issued.secret,
        key: issued.api_key,
    }))
}

/// GET /api-keys
pub async fn list_api_keys(
    State(state): State<AppState>,
) -> Result<Json<ListApiKeysResponse>, ApiError> {
    let keys = state.api_key_service.list().await?;

    debug!(count = keys.len(), "Listing API keys");

    Ok(Json(ListApiKeysResponse { keys }))
}

/// DELETE /api-keys/{id}
pub async fn delete_api_key(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.api_key_service.delete(&id).await? {
        return Err(ApiError::not_found("API key not found"));
    }

    Ok(Json(MessageResponse {
        message: "API key deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::api::state::test_support::test_state;

    #[tokio::test]
    async fn test_generate_key_without_body() {
        let state = test_state();

        let Json(response) = generate_key(State(state.clone()), None).await.unwrap();

        assert!(!response.api_key.is_empty());
        assert_eq!(response.key.preview.chars().count(), 4);
        assert!(response.key.name.is_none());
        assert!(
            state
                .api_key_service
                .validate(Some(&response.api_key))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_generate_key_with_name() {
        let body = JsonBody(GenerateKeyRequest {
            name: Some("laptop".to_string()),
        });

        let Json(response) = generate_key(State(test_state()), Some(body)).await.unwrap();

        assert_eq!(response.key.name.as_deref(), Some("laptop"));
    }

    #[tokio::test]
    async fn test_generate_response_shape() {
        let Json(response) = generate_key(State(test_state()), None).await.unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["apiKey"].is_string());
        assert!(json["id"].is_string());
        assert!(json["preview"].is_string());
        assert!(json["createdAt"].is_string());
        assert!(json.get("name").is_none());
    }

    #[tokio::test]
    async fn test_list_after_generate() {
        let state = test_state();
        let Json(issued) = generate_key(State(state.clone()), None).await.unwrap();

        let Json(listed) = list_api_keys(State(state)).await.unwrap();

        assert_eq!(listed.keys.len(), 1);
        assert_eq!(listed.keys[0], issued.key);
    }

    #[tokio::test]
    async fn test_delete_unknown_key() {
        let err = delete_api_key(State(test_state()), Path("unknown-id".to_string()))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "API key not found");
    }

    #[tokio::test]
    async fn test_delete_existing_key() {
        let state = test_state();
        let Json(issued) = generate_key(State(state.clone()), None).await.unwrap();

        let Json(response) = delete_api_key(
            State(state.clone()),
            Path(issued.key.id.as_str().to_string()),
        )
        .await
        .unwrap();

        assert_eq!(response.message, "API key deleted successfully");
        assert!(state.api_key_service.list().await.unwrap().is_empty());
    }
}
