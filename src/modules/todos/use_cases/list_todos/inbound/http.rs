use axum::{Json, extract::State};

use crate::modules::todos::core::todo::Todo;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.store.list_all().await)
}
