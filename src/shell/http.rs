use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::todos::use_cases::create_todo::inbound::http as create_http;
use crate::modules::todos::use_cases::delete_all_todos::inbound::http as delete_all_http;
use crate::modules::todos::use_cases::delete_todo::inbound::http as delete_http;
use crate::modules::todos::use_cases::get_todo::inbound::http as get_http;
use crate::modules::todos::use_cases::list_todos::inbound::http as list_http;
use crate::modules::todos::use_cases::update_todo::inbound::http as update_http;
use crate::shell::state::AppState;
use crate::shell::{health, metrics, openapi};

pub fn router(state: AppState) -> Router {
    let request_metrics = state.metrics.clone();
    Router::new()
        .route(
            "/",
            post(create_http::handle)
                .get(list_http::handle)
                .delete(delete_all_http::handle),
        )
        .route(
            "/{id}",
            get(get_http::handle)
                .patch(update_http::handle)
                .delete(delete_http::handle),
        )
        .route("/health", get(health::handle))
        .route("/metrics", get(metrics::handle))
        .route("/openapi", get(openapi::handle))
        .route("/openapi/ui", get(openapi::ui))
        .layer(middleware::from_fn_with_state(request_metrics, metrics::track))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
