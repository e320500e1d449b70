//! Slack delivery for pr-reminder.
//!
//! Messages are composed elsewhere; this crate only gets them to a channel.
//!
//! # Usage
//!
//! ```no_run
//! use slack_notifier::{MessageSink, OutgoingMessage, SlackWebhookClient};
//!
//! # async fn example() -> Result<(), slack_notifier::NotifyError> {
//! let slack = SlackWebhookClient::new("https://hooks.slack.com/services/T000/B000/XXX")?;
//!
//! slack
//!     .post(&OutgoingMessage {
//!         text: "*Nothing to review* :tada:".to_string(),
//!         channel: "#dev".to_string(),
//!         username: "PR Reminder".to_string(),
//!         icon_emoji: ":robot_face:".to_string(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`MessageSink`] is the seam the reminder pipeline depends on
//! - [`SlackWebhookClient`] posts to a Slack incoming webhook
//! - [`DryRunSink`] logs messages instead of sending them

pub mod dry_run;
pub mod error;
pub mod sink;
pub mod slack;

pub use dry_run::DryRunSink;
pub use error::NotifyError;
pub use sink::{MessageSink, OutgoingMessage};
pub use slack::SlackWebhookClient;
