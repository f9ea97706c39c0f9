//! Route definitions for the HailHub HTTP API.
//!
//! All routes are organized by principal kind and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(rider_routes())
        .merge(driver_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Rider endpoints: register, login, profile, logout
fn rider_routes() -> Router<AppState> {
    Router::new()
        .route("/riders/register", post(handlers::rider::register))
        .route("/riders/login", post(handlers::rider::login))
        .route("/riders/profile", get(handlers::rider::profile))
        .route("/riders/logout", post(handlers::rider::logout))
}

/// Driver endpoints: register, login, profile, logout
fn driver_routes() -> Router<AppState> {
    Router::new()
        .route("/drivers/register", post(handlers::driver::register))
        .route("/drivers/login", post(handlers::driver::login))
        .route("/drivers/profile", get(handlers::driver::profile))
        .route("/drivers/logout", post(handlers::driver::logout))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
