use crate::modules::todos::core::ports::TodoStore;
use crate::shell::metrics::Metrics;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore + Send + Sync>,
    pub metrics: Arc<Metrics>,
}
