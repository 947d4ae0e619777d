//! Greeting endpoint

use axum::Json;
use serde::{Deserialize, Serialize};

pub const HELLO_MESSAGE: &str = "Hello from the hashed in-memory API!";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}

/// GET /hello
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: HELLO_MESSAGE.to_string(),
    })
}
