//! API constants
//!
//! Route prefix and paths shared between route setup and the integration
//! tests.

/// API base path prefix.
pub const API_PREFIX: &str = "/api/v0";

/// Submission endpoint path (relative to the prefix).
pub const ENTRIES_PATH: &str = "/entries";

/// Full path helper for the submission endpoint.
pub fn entries_path() -> String {
    format!("{}{}", API_PREFIX, ENTRIES_PATH)
}
