//! Per-repository pipeline: fetch, enrich, classify, compose, notify.

use crate::classifier::classify;
use crate::clock::Clock;
use crate::composer::compose;
use crate::domain_models::RepositoryConfig;
use crate::error::PipelineError;
use crate::fetch::fetch_and_enrich;
use gh_client::GitHubClient;
use log::{debug, info};
use slack_notifier::{MessageSink, OutgoingMessage};

/// What a delivered report contained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivered {
    pub needs_review: usize,
    pub blocked: usize,
}

/// Collaborators shared by every repository of a run
pub struct Pipeline<'a> {
    pub github: &'a dyn GitHubClient,
    pub sink: &'a dyn MessageSink,
    pub clock: &'a dyn Clock,
    /// Label requests in flight per repository
    pub label_concurrency: usize,
}

impl Pipeline<'_> {
    /// Run the pipeline for one repository
    ///
    /// Delivers exactly one message on success, including when the
    /// repository has no open pull requests.
    pub async fn run(&self, repo: &RepositoryConfig) -> Result<Delivered, PipelineError> {
        let prs = fetch_and_enrich(self.github, repo, self.label_concurrency).await?;

        let classified = classify(prs, &repo.ignore_labels);
        debug!(
            "{}: {} need review, {} blocked {:?}",
            repo.full_name(),
            classified.needs_review.len(),
            classified.blocked.len(),
            classified
                .blocked
                .iter()
                .map(|pr| pr.number)
                .collect::<Vec<_>>()
        );

        let message = OutgoingMessage {
            text: compose(&classified, repo, self.clock),
            channel: repo.channel.clone(),
            username: repo.display_name.clone(),
            icon_emoji: repo.icon.clone(),
        };

        self.sink
            .post(&message)
            .await
            .map_err(|source| PipelineError::Notify {
                repository: repo.full_name(),
                source,
            })?;

        info!(
            "{}: report sent to {} via {}",
            repo.full_name(),
            repo.channel,
            self.sink.name()
        );

        Ok(Delivered {
            needs_review: classified.needs_review.len(),
            blocked: classified.blocked.len(),
        })
    }
}
