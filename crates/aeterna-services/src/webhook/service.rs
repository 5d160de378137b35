use anyhow::{Context, Result};
use futures::future::join_all;
use reqwest::Client;
use std::time::Duration;

use aeterna_core::models::{DeliveryOutcome, WebhookMessage};

/// Fatal dispatch failures. Individual endpoint failures are not fatal; they
/// are tallied in the [`DeliveryOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("No webhook endpoints configured")]
    NoEndpoints,

    #[error("All {0} webhook deliveries failed")]
    AllFailed(usize),
}

/// Service for delivering the entry notification to all configured
/// endpoints.
#[derive(Clone)]
pub struct WebhookService {
    http_client: Client,
}

impl WebhookService {
    pub fn new(timeout_seconds: u64) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client for webhooks")?;

        Ok(Self { http_client })
    }

    /// Deliver `message` to every endpoint concurrently and wait for all
    /// deliveries to settle. Returns the per-endpoint tally; fails only when
    /// no endpoint is configured or every delivery failed.
    #[tracing::instrument(skip(self, message, endpoints), fields(endpoint_count = endpoints.len()))]
    pub async fn dispatch(
        &self,
        message: &WebhookMessage,
        endpoints: &[String],
    ) -> Result<DeliveryOutcome, DeliveryError> {
        if endpoints.is_empty() {
            return Err(DeliveryError::NoEndpoints);
        }

        // Structured fan-out/fan-in: every delivery is launched together and
        // awaited here; none outlives the dispatch call.
        let deliveries = endpoints
            .iter()
            .enumerate()
            .map(|(index, endpoint)| self.deliver(message, index, endpoint));
        let results = join_all(deliveries).await;

        let mut outcome = DeliveryOutcome::default();
        for delivered in results {
            if delivered {
                outcome.record_success();
            } else {
                outcome.record_failure();
            }
        }

        tracing::info!(
            success_count = outcome.success_count,
            error_count = outcome.error_count,
            "Webhook dispatch settled"
        );

        if outcome.success_count == 0 {
            return Err(DeliveryError::AllFailed(outcome.error_count));
        }
        Ok(outcome)
    }

    /// Deliver to a single endpoint. Endpoint URLs carry tokens, so log sites
    /// identify endpoints by index only.
    async fn deliver(&self, message: &WebhookMessage, index: usize, endpoint: &str) -> bool {
        let result = self
            .http_client
            .post(endpoint)
            .header("User-Agent", "Aeterna-Intake/1.0")
            .json(message)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(endpoint_index = index, "Webhook delivered");
                true
            }
            Ok(response) => {
                tracing::error!(
                    endpoint_index = index,
                    status = response.status().as_u16(),
                    "Webhook delivery rejected"
                );
                false
            }
            Err(e) => {
                tracing::error!(endpoint_index = index, error = %e, "Webhook delivery failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeterna_core::models::{Embed, EmbedFooter, EmbedImage};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_message() -> WebhookMessage {
        WebhookMessage {
            content: " ".to_string(),
            embeds: vec![Embed {
                title: Some("Sanctum Aeterna Alliance Event".to_string()),
                url: None,
                color: Some(0x596D69),
                description: Some("New contest entry received!".to_string()),
                timestamp: Some("2025-06-01T12:00:00.000Z".to_string()),
                footer: Some(EmbedFooter {
                    text: "Submission #1".to_string(),
                }),
                thumbnail: None,
                image: Some(EmbedImage {
                    url: "https://img.host/a.png".to_string(),
                }),
            }],
        }
    }

    #[tokio::test]
    async fn dispatch_counts_every_successful_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(body_partial_json(serde_json::json!({ "content": " " })))
            .respond_with(ResponseTemplate::new(204))
            .expect(2)
            .mount(&server)
            .await;

        let endpoints = vec![
            format!("{}/hook", server.uri()),
            format!("{}/hook", server.uri()),
        ];
        let service = WebhookService::new(5).unwrap();
        let outcome = service.dispatch(&sample_message(), &endpoints).await.unwrap();
        assert_eq!(outcome.success_count, 2);
        assert_eq!(outcome.error_count, 0);
    }

    #[tokio::test]
    async fn partial_failure_still_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/good"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/bad"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let endpoints = vec![
            format!("{}/good", server.uri()),
            format!("{}/bad", server.uri()),
        ];
        let service = WebhookService::new(5).unwrap();
        let outcome = service.dispatch(&sample_message(), &endpoints).await.unwrap();
        assert_eq!(outcome.success_count, 1);
        assert_eq!(outcome.error_count, 1);
        assert_eq!(outcome.total(), 2);
    }

    #[tokio::test]
    async fn empty_endpoint_list_is_fatal() {
        let service = WebhookService::new(5).unwrap();
        let err = service.dispatch(&sample_message(), &[]).await.unwrap_err();
        assert!(matches!(err, DeliveryError::NoEndpoints));
    }

    #[tokio::test]
    async fn all_failures_are_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let endpoints = vec![
            format!("{}/a", server.uri()),
            format!("{}/b", server.uri()),
        ];
        let service = WebhookService::new(5).unwrap();
        let err = service.dispatch(&sample_message(), &endpoints).await.unwrap_err();
        assert!(matches!(err, DeliveryError::AllFailed(2)));
    }

    #[tokio::test]
    async fn transport_failure_counts_as_endpoint_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        // Second endpoint points at a closed port.
        let endpoints = vec![
            format!("{}/hook", server.uri()),
            "http://127.0.0.1:1/hook".to_string(),
        ];
        let service = WebhookService::new(5).unwrap();
        let outcome = service.dispatch(&sample_message(), &endpoints).await.unwrap();
        assert_eq!(outcome.success_count, 1);
        assert_eq!(outcome.error_count, 1);
    }
}
