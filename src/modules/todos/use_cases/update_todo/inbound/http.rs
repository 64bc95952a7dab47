use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::todos::core::commands::UpdateTodo;
use crate::modules::todos::core::ports::StoreError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateTodo>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(id, %rejection, "update todo body rejected");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    match state.store.update_by_id(id, patch).await {
        Ok(todo) => Json(todo).into_response(),
        Err(StoreError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
    }
}
