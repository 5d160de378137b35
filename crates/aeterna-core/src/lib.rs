//! Aeterna Core Library
//!
//! This crate provides the domain models, error types, configuration, and the
//! submission counter shared across the intake service components.

pub mod config;
pub mod counter;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use counter::SubmissionCounter;
pub use error::{AppError, ErrorMetadata, LogLevel};
