//! Multipart form extraction for entry submissions.

use axum::extract::Multipart;

use aeterna_core::models::{FilePart, SubmissionForm};
use aeterna_core::AppError;

/// Walk the multipart stream and collect text fields and file parts, keyed by
/// form field name. A part with a filename is a file; everything else is
/// text. Duplicate field names keep the first occurrence. Malformed bodies
/// (bad boundary, truncated part) surface as a validation error.
pub async fn read_submission(mut multipart: Multipart) -> Result<SubmissionForm, AppError> {
    let mut form = SubmissionForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read multipart form: {}", e)))?
    {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();
        if name.is_empty() {
            continue;
        }

        if let Some(filename) = field.file_name().map(|s| s.to_string()) {
            let content_type = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let content = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read file data: {}", e)))?;

            form.files.entry(name.clone()).or_insert(FilePart {
                name,
                filename,
                content_type,
                content,
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read field: {}", e)))?;

            form.fields.entry(name).or_insert(value);
        }
    }

    Ok(form)
}
