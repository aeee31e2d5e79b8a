pub mod health;
pub mod logs;

use crate::config::Config;
use crate::logsource::LogSource;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub log_source: Arc<dyn LogSource>,
    pub config: Config,
}

impl AppState {
    pub fn new(log_source: Arc<dyn LogSource>, config: Config) -> Self {
        Self { log_source, config }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/logs", get(logs::get_logs))
        .layer(cors)
        .with_state(state)
}
