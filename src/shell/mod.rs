// Composition root for the todos service.
//
// Responsibilities
// - Build the shared application state around the todo store.
// - Expose the HTTP router with health, metrics, OpenAPI and CORS wired in.
// - The binary entry point in main.rs reads config and serves the router.

pub mod health;
pub mod http;
pub mod metrics;
pub mod openapi;
pub mod state;

use std::sync::Arc;

use crate::config::Config;
use crate::modules::todos::adapters::outbound::todo_store_in_memory::InMemoryTodoStore;
use crate::shell::metrics::Metrics;
use crate::shell::state::AppState;

pub fn build_state(config: &Config) -> AppState {
    AppState {
        store: Arc::new(InMemoryTodoStore::new(config.base_url.clone())),
        metrics: Metrics::init(),
    }
}
