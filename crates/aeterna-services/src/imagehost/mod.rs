//! Image host upload service
//!
//! Relays submitted images to the external hosting API and returns their
//! public URLs.

pub mod service;

// Re-export commonly used types
pub use service::{ImageHostService, UploadError};
