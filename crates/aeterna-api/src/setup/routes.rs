//! Route configuration and setup

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use aeterna_core::{AppError, Config};

use crate::constants;
use crate::error::HttpAppError;
use crate::handlers;
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let app = Router::new()
        .route("/health", get(handlers::health_check))
        // Wrong method on the submission route must still produce the JSON
        // error shape, not axum's empty-body default.
        .route(
            constants::entries_path().as_str(),
            post(handlers::submit_entry).fallback(method_not_allowed),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(request_body_limit(config)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

async fn method_not_allowed() -> HttpAppError {
    HttpAppError(AppError::MethodNotAllowed)
}

/// Whole-request cap: every image slot at the per-file maximum, plus form
/// overhead.
fn request_body_limit(config: &Config) -> usize {
    let slots = 1 + aeterna_core::models::CAPTURA_SLOTS;
    slots * config.max_image_size_bytes + 1024 * 1024
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        if config.is_production() {
            tracing::warn!("CORS configured to allow all origins - not recommended for production");
        }
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins.iter().map(|o| o.parse()).collect();

        CorsLayer::new()
            .allow_origin(origins.unwrap_or_default())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
