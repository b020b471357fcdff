use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/sources", get(handlers::get_sources))
        .route("/sources/overall", get(handlers::get_overall_status))
        .route("/sources/refresh", post(handlers::refresh_sources))
        .route("/sources/{id}/retry", post(handlers::retry_source))
        .route("/cache", delete(handlers::clear_cache))
        .route("/cache/stats", get(handlers::get_cache_stats))
        .route("/cache/entries", get(handlers::get_cache_entries))
        .route("/cache/{id}", delete(handlers::clear_source_cache))
        .with_state(state)
}
