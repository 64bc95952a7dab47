use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::todos::core::ports::StoreError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.store.get_by_id(id).await {
        Ok(todo) => Json(todo).into_response(),
        Err(StoreError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
    }
}
