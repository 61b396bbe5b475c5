//! Route definitions for the HTTP API.
//!
//! Routes are mounted under `/api`. Anything unmatched falls through to an
//! error envelope instead of an empty `404`.

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and request logging.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::fallback::not_found)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Health check endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
