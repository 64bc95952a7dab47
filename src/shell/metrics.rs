// Request metrics for the whole router.
//
// Responsibilities
// - Count every handled request by method and response status class.
// - Render the counters and process uptime in the Prometheus text format.
//
// Labels come from fixed sets, so the number of series stays bounded whatever
// method names clients send.

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use crate::shell::state::AppState;

pub struct Metrics {
    started_at: Instant,
    requests: Mutex<BTreeMap<(&'static str, &'static str), u64>>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            requests: Mutex::new(BTreeMap::new()),
        }
    }

    /// Creates the registry the router reports into. Called once at startup.
    pub fn init() -> Arc<Self> {
        tracing::info!("metrics initialized, exposed on /metrics");
        Arc::new(Self::new())
    }

    pub fn record(&self, method: &Method, status: StatusCode) {
        let mut requests = self.requests.lock().unwrap_or_else(PoisonError::into_inner);
        *requests
            .entry((method_label(method), status_class(status)))
            .or_insert(0) += 1;
    }

    pub fn render(&self) -> String {
        let requests = self.requests.lock().unwrap_or_else(PoisonError::into_inner);
        let mut out = String::new();
        out.push_str("# HELP todos_http_requests_total Total HTTP requests handled.\n");
        out.push_str("# TYPE todos_http_requests_total counter\n");
        for ((method, status), count) in requests.iter() {
            out.push_str(&format!(
                "todos_http_requests_total{{method=\"{method}\",status=\"{status}\"}} {count}\n"
            ));
        }
        out.push_str("# HELP todos_uptime_seconds Seconds since the service started.\n");
        out.push_str("# TYPE todos_uptime_seconds gauge\n");
        out.push_str(&format!(
            "todos_uptime_seconds {:.3}\n",
            self.started_at.elapsed().as_secs_f64()
        ));
        out
    }
}

fn method_label(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "POST" => "POST",
        "PATCH" => "PATCH",
        "DELETE" => "DELETE",
        "OPTIONS" => "OPTIONS",
        "HEAD" => "HEAD",
        _ => "other",
    }
}

fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        _ => "5xx",
    }
}

pub async fn track(State(metrics): State<Arc<Metrics>>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let response = next.run(request).await;
    metrics.record(&method, response.status());
    response
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
