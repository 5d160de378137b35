//! Data models for the intake service
//!
//! Submission input types, the outbound webhook notification document, and
//! delivery results.

mod delivery;
mod embed;
mod submission;

// Re-export all models for convenient imports
pub use delivery::DeliveryOutcome;
pub use embed::{
    Embed, EmbedFooter, EmbedImage, EmbedOptions, EmbedThumbnail, WebhookMessage, MAX_GALLERY_IMAGES,
};
pub use submission::{
    captura_field, FilePart, SubmissionFields, SubmissionForm, CAPTURA_SLOTS, FIELD_ARSENAL_IMAGE,
    FIELD_CLAN, FIELD_IN_GAME_NAME, FIELD_NOTES, FIELD_WARFRAME,
};
