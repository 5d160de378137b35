//! Application setup and initialization
//!
//! Initialization logic extracted from main.rs for better organization and
//! testability.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::Result;

use aeterna_core::Config;

use crate::state::AppState;

/// Initialize the application state and router.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let state = Arc::new(AppState::from_config(config.clone())?);
    let router = routes::setup_routes(&config, state.clone())?;
    Ok((state, router))
}
