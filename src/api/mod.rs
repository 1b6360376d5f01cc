//! API module
//!
//! HTTP API endpoints and middleware.

pub mod middleware;
pub mod report_routes;
pub mod routes;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::store::SharedClub;

pub use routes::create_router;

/// State shared by every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub club: SharedClub,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(club: SharedClub, config: Config) -> Self {
        Self {
            club,
            config: Arc::new(config),
        }
    }
}

/// Build the application router
pub fn build_app(state: AppState) -> Router {
    // Layers run last-added first: context -> logging -> auth -> handler
    let protected_routes = create_router()
        .merge(report_routes::create_report_router())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ))
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(axum_middleware::from_fn(middleware::context_middleware));

    Router::new()
        // Health check (no auth)
        .route("/health", get(health_check))
        .nest("/api/v1", protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
