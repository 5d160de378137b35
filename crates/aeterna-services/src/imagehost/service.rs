use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use aeterna_core::models::FilePart;

/// Upload failure classes. The caller decides whether a failure is fatal:
/// the arsenal image aborts the submission, captura images are logged and
/// skipped.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Image host API key is not configured")]
    MissingApiKey,

    #[error("Image host rejected the upload with status {status}")]
    Rejected { status: u16 },

    #[error("Image host request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Image host response did not contain an image URL")]
    MalformedResponse,
}

/// Service for uploading images to the external hosting API.
#[derive(Clone)]
pub struct ImageHostService {
    http_client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ImageHostResponse {
    data: Option<ImageHostData>,
}

#[derive(Debug, Deserialize)]
struct ImageHostData {
    url: Option<String>,
}

impl ImageHostService {
    pub fn new(endpoint: String, api_key: String, timeout_seconds: u64) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client for image host")?;

        Ok(Self {
            http_client,
            endpoint,
            api_key,
        })
    }

    /// Upload one image and return its hosted URL. One outbound call, no
    /// retry.
    #[tracing::instrument(
        skip(self, file),
        fields(field = %file.name, filename = %file.filename, size = file.content.len())
    )]
    pub async fn upload(&self, file: &FilePart) -> Result<String, UploadError> {
        if self.api_key.is_empty() {
            return Err(UploadError::MissingApiKey);
        }

        let part = reqwest::multipart::Part::bytes(file.content.to_vec())
            .file_name(file.filename.clone())
            .mime_str(&file.content_type)?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .http_client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Image host rejected upload");
            return Err(UploadError::Rejected {
                status: status.as_u16(),
            });
        }

        let body: ImageHostResponse = response
            .json()
            .await
            .map_err(|_| UploadError::MalformedResponse)?;

        let url = body
            .data
            .and_then(|d| d.url)
            .filter(|u| !u.is_empty())
            .ok_or(UploadError::MalformedResponse)?;

        tracing::info!(url = %url, "Image uploaded");
        Ok(url)
    }
}
