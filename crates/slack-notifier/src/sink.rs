//! Delivery seam between the reminder pipeline and a messaging service.

use async_trait::async_trait;

use crate::error::NotifyError;

/// A fully composed message together with its destination and identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// Message body (Slack mrkdwn)
    pub text: String,
    /// Destination channel, e.g. `#dev` or `@someone`
    pub channel: String,
    /// Display name of the posting bot
    pub username: String,
    /// Emoji shortcode used as the bot's avatar
    pub icon_emoji: String,
}

/// Anything that can deliver an [`OutgoingMessage`].
///
/// Delivery is one-shot: implementations report failure and never retry.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Deliver a message.
    async fn post(&self, message: &OutgoingMessage) -> Result<(), NotifyError>;
}
