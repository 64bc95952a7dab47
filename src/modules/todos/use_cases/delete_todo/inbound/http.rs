use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::modules::todos::core::ports::StoreError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<i64>) -> StatusCode {
    match state.store.delete_by_id(id).await {
        Ok(()) => StatusCode::OK,
        Err(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
    }
}
