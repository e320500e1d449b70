//! In-memory collaborators for pipeline and orchestrator tests.

use crate::domain_models::RepositoryConfig;
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use gh_client::{GitHubClient, Label, PullRequest};
use slack_notifier::{MessageSink, NotifyError, OutgoingMessage};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn listed_pr(number: u64, title: &str) -> PullRequest {
    PullRequest {
        number,
        title: title.to_string(),
        body: None,
        author: "alice".to_string(),
        created_at: Utc::now() - ChronoDuration::hours(1),
        html_url: format!("https://github.com/acme/repo/pull/{number}"),
    }
}

pub fn repo_config(name: &str, ignore_labels: &[&str]) -> RepositoryConfig {
    RepositoryConfig {
        owner: "acme".to_string(),
        name: name.to_string(),
        channel: format!("#{name}"),
        display_name: "PR Reminder".to_string(),
        icon: ":robot_face:".to_string(),
        ignore_labels: ignore_labels.iter().map(|l| l.to_string()).collect(),
        deployment_footer: false,
    }
}

/// GitHub double keyed by repository name (the owner is ignored)
#[derive(Default)]
pub struct FakeGitHub {
    prs: HashMap<String, Vec<PullRequest>>,
    labels: HashMap<(String, u64), Vec<Label>>,
    label_delays: HashMap<(String, u64), Duration>,
    failing_listings: HashSet<String>,
    failing_labels: HashSet<(String, u64)>,
    label_requests: AtomicUsize,
}

impl FakeGitHub {
    pub fn with_prs(mut self, repo: &str, prs: Vec<PullRequest>) -> Self {
        self.prs.insert(repo.to_string(), prs);
        self
    }

    pub fn with_labels(mut self, repo: &str, number: u64, names: &[&str]) -> Self {
        self.labels.insert(
            (repo.to_string(), number),
            names.iter().map(|name| Label::named(*name)).collect(),
        );
        self
    }

    pub fn with_label_delay(mut self, repo: &str, number: u64, delay: Duration) -> Self {
        self.label_delays.insert((repo.to_string(), number), delay);
        self
    }

    pub fn failing_listing(mut self, repo: &str) -> Self {
        self.failing_listings.insert(repo.to_string());
        self
    }

    pub fn failing_labels(mut self, repo: &str, number: u64) -> Self {
        self.failing_labels.insert((repo.to_string(), number));
        self
    }

    pub fn label_requests(&self) -> usize {
        self.label_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GitHubClient for FakeGitHub {
    async fn fetch_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> anyhow::Result<Vec<PullRequest>> {
        if self.failing_listings.contains(repo) {
            anyhow::bail!("502 Bad Gateway listing {owner}/{repo}");
        }
        Ok(self.prs.get(repo).cloned().unwrap_or_default())
    }

    async fn fetch_issue_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> anyhow::Result<Vec<Label>> {
        self.label_requests.fetch_add(1, Ordering::SeqCst);

        let key = (repo.to_string(), number);
        if let Some(delay) = self.label_delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_labels.contains(&key) {
            anyhow::bail!("403 rate limited fetching labels for {owner}/{repo}#{number}");
        }
        Ok(self.labels.get(&key).cloned().unwrap_or_default())
    }
}

/// Sink that records every message it accepts
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<OutgoingMessage>>,
    failing_channels: HashSet<String>,
}

impl RecordingSink {
    pub fn failing_channel(mut self, channel: &str) -> Self {
        self.failing_channels.insert(channel.to_string());
        self
    }

    pub fn messages(&self) -> Vec<OutgoingMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSink for RecordingSink {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn post(&self, message: &OutgoingMessage) -> Result<(), NotifyError> {
        if self.failing_channels.contains(&message.channel) {
            return Err(NotifyError::Rejected {
                status: 404,
                body: "channel_not_found".to_string(),
            });
        }
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}
