use std::sync::Arc;

use crate::modules::todos::adapters::outbound::todo_store_in_memory::InMemoryTodoStore;
use crate::shell::metrics::Metrics;
use crate::shell::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:8080";

pub fn make_test_state() -> AppState {
    AppState {
        store: Arc::new(InMemoryTodoStore::new(TEST_BASE_URL)),
        metrics: Arc::new(Metrics::new()),
    }
}
