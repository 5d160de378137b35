//! Aeterna API Library
//!
//! This crate provides the HTTP entry-intake handler, routing, and
//! application setup.

// Module declarations
pub mod constants;
pub mod error;
pub mod handlers;
pub mod multipart;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
