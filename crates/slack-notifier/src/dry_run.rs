//! Sink that logs instead of sending.

use async_trait::async_trait;
use log::info;

use crate::error::NotifyError;
use crate::sink::{MessageSink, OutgoingMessage};

/// Logs every message at `info` and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunSink;

#[async_trait]
impl MessageSink for DryRunSink {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    async fn post(&self, message: &OutgoingMessage) -> Result<(), NotifyError> {
        info!(
            "[dry-run] {} as {} {}:\n{}",
            message.channel, message.username, message.icon_emoji, message.text
        );
        Ok(())
    }
}
