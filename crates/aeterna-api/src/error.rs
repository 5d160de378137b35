//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`.
//! Use `AppError` (or the service error enums, which convert via `From`) for
//! errors and `?` so they become `HttpAppError` and render consistently
//! (status, body, logging).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use aeterna_core::{AppError, ErrorMetadata, LogLevel};
use aeterna_services::{DeliveryError, UploadError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from aeterna-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::Internal(err.to_string()))
    }
}

// Convert service errors to HttpAppError (avoids orphan rule: we impl for
// local HttpAppError). The transport detail stays in the service-layer logs;
// only a short message reaches the client.

impl From<UploadError> for HttpAppError {
    fn from(err: UploadError) -> Self {
        let app = match err {
            UploadError::MissingApiKey => {
                AppError::Config("Image host API key is not configured".to_string())
            }
            UploadError::Rejected { .. } | UploadError::Network(_) | UploadError::MalformedResponse => {
                AppError::Upload("Image upload failed".to_string())
            }
        };
        HttpAppError(app)
    }
}

impl From<DeliveryError> for HttpAppError {
    fn from(err: DeliveryError) -> Self {
        let app = match err {
            DeliveryError::NoEndpoints => {
                AppError::Delivery("No Discord webhooks configured".to_string())
            }
            DeliveryError::AllFailed(_) => AppError::Delivery("All webhooks failed".to_string()),
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Error occurred");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = Json(ErrorResponse {
            error: app_error.client_message(),
            code: app_error.error_code().to_string(),
        });

        (status, body).into_response()
    }
}
