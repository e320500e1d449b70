//! Slack incoming-webhook client.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Serialize;

use crate::error::NotifyError;
use crate::sink::{MessageSink, OutgoingMessage};

/// Request timeout used by [`SlackWebhookClient::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts messages to a Slack incoming webhook.
///
/// Legacy webhooks honour the `channel`, `username` and `icon_emoji`
/// overrides, which is how one webhook serves several repositories.
#[derive(Debug, Clone)]
pub struct SlackWebhookClient {
    webhook_url: String,
    client: reqwest::Client,
}

impl SlackWebhookClient {
    /// Create a client for `webhook_url` with the default timeout.
    pub fn new(webhook_url: impl Into<String>) -> Result<Self, NotifyError> {
        Self::with_timeout(webhook_url, DEFAULT_TIMEOUT)
    }

    /// Create a client for `webhook_url` with a custom request timeout.
    pub fn with_timeout(
        webhook_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let webhook_url = webhook_url.into();
        if webhook_url.trim().is_empty() {
            return Err(NotifyError::NotConfigured("SLACK_WEBHOOK_URL".to_string()));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            webhook_url,
            client,
        })
    }
}

#[async_trait]
impl MessageSink for SlackWebhookClient {
    fn name(&self) -> &'static str {
        "slack"
    }

    async fn post(&self, message: &OutgoingMessage) -> Result<(), NotifyError> {
        let payload = WebhookPayload::from(message);

        debug!("Posting to Slack channel {}", message.channel);

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!("Slack accepted message for {}", message.channel);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(
            "Slack webhook rejected message for {}: {} {}",
            message.channel, status, body
        );

        Err(NotifyError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    channel: &'a str,
    username: &'a str,
    icon_emoji: &'a str,
    text: &'a str,
}

impl<'a> From<&'a OutgoingMessage> for WebhookPayload<'a> {
    fn from(message: &'a OutgoingMessage) -> Self {
        Self {
            channel: &message.channel,
            username: &message.username,
            icon_emoji: &message.icon_emoji,
            text: &message.text,
        }
    }
}
