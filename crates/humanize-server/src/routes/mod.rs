mod detect;
mod health;
mod rewrite;

use std::sync::Arc;

use axum::Router;
use humanize_service::{Detector, Rewriter};
use tower_http::cors::CorsLayer;

/// Shared state handed to every route handler. Built once at startup;
/// handlers never consult the environment themselves.
pub struct InnerAppState {
    pub rewriter: Arc<dyn Rewriter>,
    pub detector: Arc<dyn Detector>,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(rewrite::routes())
        .merge(detect::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
