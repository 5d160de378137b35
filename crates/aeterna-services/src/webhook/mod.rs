//! Webhook delivery service
//!
//! Fan-out delivery of the entry notification to all configured endpoints.

pub mod service;

// Re-export commonly used types
pub use service::{DeliveryError, WebhookService};
