use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;

/// Build and configure the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Quote routes
        .route("/api/quote/{id}", get(handlers::get_quote))
        .route("/api/quote/{id}", put(handlers::update_quote))
        // Tag-based cache invalidation
        .route("/api/invalidate", post(handlers::invalidate_cache))
        // Middleware
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
