//! Entry submission handler
//!
//! Orchestrates one contest entry: parse the multipart form, validate it,
//! relay the images to the hosting API, and notify every configured webhook.
//! Captura upload failures are logged and skipped; an arsenal upload failure
//! aborts the submission before anything is dispatched.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use aeterna_core::models::{
    captura_field, EmbedOptions, SubmissionFields, WebhookMessage, CAPTURA_SLOTS,
    FIELD_ARSENAL_IMAGE,
};
use aeterna_core::AppError;

use crate::error::HttpAppError;
use crate::multipart::read_submission;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn submit_entry(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<SubmitResponse>, HttpAppError> {
    let form = read_submission(multipart).await?;

    let fields = SubmissionFields::from_form(&form.fields)?;

    let arsenal = form.files.get(FIELD_ARSENAL_IMAGE).ok_or_else(|| {
        AppError::Validation("Arsenal screenshot is required".to_string())
    })?;

    // All file invariants are checked up front; nothing leaves the process
    // until the whole submission validates.
    arsenal.validate(state.config.max_image_size_bytes)?;
    for slot in 0..CAPTURA_SLOTS {
        if let Some(part) = form.files.get(&captura_field(slot)) {
            part.validate(state.config.max_image_size_bytes)?;
        }
    }

    // Captura uploads run one at a time in slot order; a failed slot leaves a
    // gap rather than a placeholder.
    let mut captura_urls = Vec::new();
    for slot in 0..CAPTURA_SLOTS {
        if let Some(part) = form.files.get(&captura_field(slot)) {
            match state.uploader.upload(part).await {
                Ok(url) => captura_urls.push(url),
                Err(e) => {
                    tracing::warn!(slot, error = %e, "Failed to upload captura image, skipping");
                }
            }
        }
    }

    let arsenal_url = state.uploader.upload(arsenal).await?;

    let submission_number = state.counter.next();
    let message = WebhookMessage::build(
        &fields,
        &captura_urls,
        &arsenal_url,
        submission_number,
        Utc::now(),
        &EmbedOptions::from(&state.config),
    );

    let outcome = state
        .webhooks
        .dispatch(&message, &state.config.webhook_urls)
        .await?;

    tracing::info!(
        submission_number,
        captura_count = captura_urls.len(),
        success_count = outcome.success_count,
        error_count = outcome.error_count,
        "Entry submitted"
    );

    Ok(Json(SubmitResponse {
        success: true,
        message: format!("Entry submitted to {} server(s)", outcome.success_count),
    }))
}
