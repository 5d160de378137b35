//! Aeterna Services Library
//!
//! Outbound I/O services for the intake pipeline: the image-host uploader
//! and the webhook dispatcher. Each service owns its error enum; the API
//! layer maps them onto HTTP responses.

pub mod imagehost;
pub mod webhook;

// Re-export commonly used types
pub use imagehost::{ImageHostService, UploadError};
pub use webhook::{DeliveryError, WebhookService};
