//! API layer - routes, handlers, and middleware

pub mod handlers;
pub mod middleware;
pub mod routes;

use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.server.max_request_body_size;
    let cors_origins = state.config.server.cors_origins.clone();

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
        // Returns 204 to keep browser requests out of the 404 logs
        .route("/favicon.ico", get(favicon))
        .merge(routes::metrics::metrics_routes())
        .merge(routes::pokemon::pokemon_routes())
        .with_state(state)
        // Middleware (applied in reverse order)
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(axum::middleware::from_fn(middleware::metrics_middleware))
        .layer(middleware::compression())
        .layer(middleware::cors(&cors_origins))
        .layer(DefaultBodyLimit::max(max_body_size))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "pokedex-server"
    }))
}

async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to Pokédex!" }))
}

async fn favicon() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
