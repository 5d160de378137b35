//! Submission input types
//!
//! Field and file-slot names match the browser form: text fields
//! `inGameName` / `clan` / `warframe` / `notes`, one required `arsenalImage`
//! file and up to five optional `capturaImage0`..`capturaImage4` files.

use std::collections::HashMap;

use bytes::Bytes;

use crate::error::AppError;

pub const FIELD_IN_GAME_NAME: &str = "inGameName";
pub const FIELD_CLAN: &str = "clan";
pub const FIELD_WARFRAME: &str = "warframe";
pub const FIELD_NOTES: &str = "notes";
pub const FIELD_ARSENAL_IMAGE: &str = "arsenalImage";

/// Number of optional supporting-image slots.
pub const CAPTURA_SLOTS: usize = 5;

/// Form field name for supporting-image slot `i`.
pub fn captura_field(slot: usize) -> String {
    format!("capturaImage{}", slot)
}

/// One uploaded file from the multipart form.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub name: String,
    pub filename: String,
    pub content_type: String,
    pub content: Bytes,
}

impl FilePart {
    /// Enforce the file invariants: an image media type and the configured
    /// size cap. Runs before any external call is made.
    pub fn validate(&self, max_size_bytes: usize) -> Result<(), AppError> {
        if !self.content_type.starts_with("image/") {
            return Err(AppError::Validation(format!(
                "Field '{}' must be an image, got '{}'",
                self.name, self.content_type
            )));
        }
        if self.content.len() > max_size_bytes {
            return Err(AppError::Validation(format!(
                "Image '{}' exceeds the maximum size of {} MB",
                self.name,
                max_size_bytes / 1024 / 1024
            )));
        }
        Ok(())
    }
}

/// Raw output of the multipart parse step: text fields and file parts keyed
/// by form field name.
#[derive(Debug, Default)]
pub struct SubmissionForm {
    pub fields: HashMap<String, String>,
    pub files: HashMap<String, FilePart>,
}

/// Validated identifying fields of one contest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFields {
    pub in_game_name: String,
    pub clan: String,
    pub warframe: String,
    pub notes: Option<String>,
}

impl SubmissionFields {
    /// Validate and extract the required text fields. Required fields must be
    /// present and non-empty after trimming; `notes` is kept only when it has
    /// content.
    pub fn from_form(fields: &HashMap<String, String>) -> Result<Self, AppError> {
        let required = |name: &str| -> Result<String, AppError> {
            fields
                .get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or_else(|| AppError::Validation("Missing required fields".to_string()))
        };

        Ok(Self {
            in_game_name: required(FIELD_IN_GAME_NAME)?,
            clan: required(FIELD_CLAN)?,
            warframe: required(FIELD_WARFRAME)?,
            notes: fields
                .get(FIELD_NOTES)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string),
        })
    }
}
