use axum::{extract::State, http::StatusCode};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> StatusCode {
    state.store.delete_all().await;
    StatusCode::OK
}
