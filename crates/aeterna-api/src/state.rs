//! Application state shared across request handlers.

use anyhow::Result;

use aeterna_core::{Config, SubmissionCounter};
use aeterna_services::{ImageHostService, WebhookService};

/// Read-only configuration plus the per-process services and the submission
/// counter. Built once at startup and shared behind an `Arc`.
pub struct AppState {
    pub config: Config,
    pub counter: SubmissionCounter,
    pub uploader: ImageHostService,
    pub webhooks: WebhookService,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self> {
        let uploader = ImageHostService::new(
            config.imgbb_endpoint.clone(),
            config.imgbb_api_key.clone(),
            config.http_timeout_seconds,
        )?;
        let webhooks = WebhookService::new(config.http_timeout_seconds)?;
        let counter = SubmissionCounter::new(config.starting_count);

        Ok(Self {
            config,
            counter,
            uploader,
            webhooks,
        })
    }
}
