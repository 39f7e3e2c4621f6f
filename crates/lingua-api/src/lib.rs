//! Lingua API server library.
//!
//! Exposes routes, state, and error mapping so integration tests can build
//! the same router the binary serves.

pub mod error;
pub mod panel_config;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/catalog", routes::catalog::router())
        .nest("/api/v1/panel", routes::panel::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
