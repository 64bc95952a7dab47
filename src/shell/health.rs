use axum::{Json, response::IntoResponse};
use chrono::Utc;
use serde_json::json;

pub async fn handle() -> impl IntoResponse {
    Json(json!({
        "status": "UP",
        "details": [],
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
