//! Lingua API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use lingua_catalog::{CatalogSource, JsonFileSource};
use lingua_core::course::CourseContext;
use tracing_subscriber::EnvFilter;

use lingua_api::error::AppError;
use lingua_api::panel_config;
use lingua_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Lingua API server");

    // Read configuration from environment.
    let catalog_path = std::env::var("CATALOG_PATH")
        .map_err(|_| AppError::Config("CATALOG_PATH environment variable must be set".into()))?;
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
    let default_course = default_course_from_env();

    // Load the catalog once; it is immutable for the process lifetime.
    let catalog = JsonFileSource::new(&catalog_path).load().await?;

    // Build application state and router.
    let app_state = AppState::new(
        Arc::new(catalog),
        panel_config::base_sections(),
        default_course,
    );
    let app = lingua_api::app(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

/// Default course context, overridable via environment.
fn default_course_from_env() -> CourseContext {
    let mut course = CourseContext::default();
    if let Ok(id) = std::env::var("DEFAULT_COURSE_ID") {
        course.course_id = id;
    }
    if let Ok(name) = std::env::var("DEFAULT_COURSE_NAME") {
        course.course_name = name;
    }
    course
}
