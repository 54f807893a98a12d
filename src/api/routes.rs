//! API route definitions

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers::AppState;
use super::handlers::{
    self,
};

/// Create the API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(handlers::root))
        // Health check
        .route("/health", get(handlers::health))
        // Chat endpoint
        .route("/chat", post(handlers::chat))
        .with_state(state)
}
