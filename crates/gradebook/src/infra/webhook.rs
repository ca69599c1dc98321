//! Webhook Notification Dispatcher
//!
//! Delivers submission events as JSON POSTs to a configured endpoint.
//! Delivery is synchronous with the request that produced the event; the
//! caller decides what a failure means.

use std::time::Duration;

use crate::domain::notifier::{DispatchError, SubmissionEvent, SubmissionNotifier};

/// HTTP webhook notifier
#[derive(Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookNotifier {
    /// Build a notifier for `endpoint` with a per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, DispatchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl SubmissionNotifier for WebhookNotifier {
    async fn publish(&self, event: &SubmissionEvent) -> Result<(), DispatchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(event)
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "notification endpoint rejected event");
            return Err(DispatchError::BadStatus(status.as_u16()));
        }

        tracing::debug!(
            assignment_id = %event.assignment_id,
            "submission event dispatched"
        );

        Ok(())
    }
}
