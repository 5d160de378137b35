//! Error types module
//!
//! This module provides the error taxonomy used throughout the intake
//! service. All errors are unified under the `AppError` enum, which maps each
//! failure class to its HTTP status, machine-readable code, and log level.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from the client
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Static metadata for each variant: (http_status, error_code, sensitive, log_level).
/// client_message stays per-variant for dynamic content.
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::MethodNotAllowed => (405, "METHOD_NOT_ALLOWED", false, LogLevel::Debug),
        AppError::Validation(_) => (400, "VALIDATION_ERROR", false, LogLevel::Debug),
        AppError::Config(_) => (500, "CONFIG_ERROR", true, LogLevel::Error),
        AppError::Upload(_) => (500, "UPLOAD_ERROR", true, LogLevel::Error),
        AppError::Delivery(_) => (500, "DELIVERY_ERROR", true, LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for log fields
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::MethodNotAllowed => "MethodNotAllowed",
            AppError::Validation(_) => "Validation",
            AppError::Config(_) => "Config",
            AppError::Upload(_) => "Upload",
            AppError::Delivery(_) => "Delivery",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MethodNotAllowed => "Method not allowed".to_string(),
            AppError::Validation(ref msg) => msg.clone(),
            // Server-side failures keep their short human-readable message but
            // never the underlying transport detail.
            AppError::Config(ref msg) => msg.clone(),
            AppError::Upload(ref msg) => msg.clone(),
            AppError::Delivery(ref msg) => msg.clone(),
            AppError::Internal(_) => "Submission failed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_method_not_allowed() {
        let err = AppError::MethodNotAllowed;
        assert_eq!(err.http_status_code(), 405);
        assert_eq!(err.error_code(), "METHOD_NOT_ALLOWED");
        assert_eq!(err.client_message(), "Method not allowed");
        assert!(!err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_error_metadata_validation() {
        let err = AppError::Validation("Missing required fields".to_string());
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.client_message(), "Missing required fields");
        assert!(!err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_error_metadata_upload() {
        let err = AppError::Upload("Image upload failed".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "UPLOAD_ERROR");
        assert!(err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let err = AppError::Internal("reqwest::Error { kind: Connect }".to_string());
        assert_eq!(err.client_message(), "Submission failed");
        assert_eq!(err.http_status_code(), 500);
    }
}
