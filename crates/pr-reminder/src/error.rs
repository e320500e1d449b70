//! Pipeline error types.

use slack_notifier::NotifyError;
use std::error::Error as _;
use thiserror::Error;

/// Why one repository's pipeline did not deliver its report.
///
/// Each variant is local to its repository; siblings keep running.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Listing open pull requests failed
    #[error("failed to list pull requests for {repository}")]
    Fetch {
        repository: String,
        #[source]
        source: anyhow::Error,
    },

    /// Fetching the labels of one pull request failed
    #[error("failed to fetch labels for {repository}#{pr_number}")]
    LabelFetch {
        repository: String,
        pr_number: u64,
        #[source]
        source: anyhow::Error,
    },

    /// The composed report could not be delivered
    #[error("failed to deliver report for {repository}")]
    Notify {
        repository: String,
        #[source]
        source: NotifyError,
    },
}

impl PipelineError {
    /// The error and all of its causes on one line
    pub fn describe(&self) -> String {
        let mut text = self.to_string();
        let mut cause = self.source();
        while let Some(err) = cause {
            text.push_str(": ");
            text.push_str(&err.to_string());
            cause = err.source();
        }
        text
    }
}
