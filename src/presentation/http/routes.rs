//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(domain_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// Domain CRUD routes
fn domain_routes() -> Router<AppState> {
    Router::new()
        .route("/domains", get(handlers::domain::get_domains))
        .route("/domains", post(handlers::domain::create_domain))
        .route("/domains/{id}", get(handlers::domain::get_domain))
        .route("/domains/{id}", put(handlers::domain::update_domain))
        .route("/domains/{id}", delete(handlers::domain::delete_domain))
}
