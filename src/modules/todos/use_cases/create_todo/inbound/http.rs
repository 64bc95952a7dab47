use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::todos::core::commands::CreateTodo;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateTodo>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(%rejection, "create todo body rejected");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    let todo = state.store.create(command).await;
    (StatusCode::CREATED, Json(todo)).into_response()
}
