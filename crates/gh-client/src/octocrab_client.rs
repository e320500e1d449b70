//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! This client makes real API calls and walks every result page.

use crate::client::GitHubClient;
use crate::token_resolver::TokenResolver;
use crate::types::{Label, PullRequest};
use crate::DEFAULT_HOST;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use octocrab::Octocrab;
use std::sync::Arc;

/// GitHub's maximum page size
const PER_PAGE: u8 = 100;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Resolve a token for `host` and build an authenticated client
    ///
    /// `None` (or `github.com`) targets the public API; any other host is
    /// treated as GitHub Enterprise and served from `https://{host}/api/v3`.
    pub async fn connect(host: Option<&str>, tokens: &TokenResolver) -> Result<Self> {
        let effective_host = host.unwrap_or(DEFAULT_HOST);
        info!("Creating GitHub client for host: {}", effective_host);

        let token = tokens.get_token(host).await?;
        let mut builder = Octocrab::builder().personal_token(token);

        if let Some(uri) = enterprise_base_uri(host) {
            builder = builder.base_uri(&uri).context("Failed to set base URI")?;
        }

        let octocrab = builder.build().context("Failed to build Octocrab client")?;
        Ok(Self::new(Arc::new(octocrab)))
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_pull_requests(&self, owner: &str, repo: &str) -> Result<Vec<PullRequest>> {
        debug!("Fetching PRs for {}/{}", owner, repo);

        let first_page = self
            .octocrab
            .pulls(owner, repo)
            .list()
            .state(octocrab::params::State::Open)
            .per_page(PER_PAGE)
            .send()
            .await
            .with_context(|| format!("Failed to list pull requests for {}/{}", owner, repo))?;

        let pulls = self
            .octocrab
            .all_pages(first_page)
            .await
            .with_context(|| format!("Failed to page pull requests for {}/{}", owner, repo))?;

        let prs: Vec<PullRequest> = pulls.iter().map(convert_pull_request).collect();

        debug!("Fetched {} PRs for {}/{}", prs.len(), owner, repo);
        Ok(prs)
    }

    async fn fetch_issue_labels(&self, owner: &str, repo: &str, number: u64) -> Result<Vec<Label>> {
        debug!("Fetching labels for {}/{}#{}", owner, repo, number);

        let first_page = self
            .octocrab
            .issues(owner, repo)
            .list_labels_for_issue(number)
            .per_page(PER_PAGE)
            .send()
            .await
            .with_context(|| format!("Failed to list labels for {}/{}#{}", owner, repo, number))?;

        let labels = self
            .octocrab
            .all_pages(first_page)
            .await
            .with_context(|| format!("Failed to page labels for {}/{}#{}", owner, repo, number))?;

        Ok(labels.into_iter().map(convert_label).collect())
    }
}

/// API base URI for a GitHub Enterprise host, `None` for github.com
fn enterprise_base_uri(host: Option<&str>) -> Option<String> {
    match host {
        Some(h) if !h.is_empty() && h != DEFAULT_HOST => Some(format!("https://{}/api/v3", h)),
        _ => None,
    }
}

/// Convert octocrab PullRequest to our PullRequest type
fn convert_pull_request(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.clone().unwrap_or_default(),
        body: pr.body.clone(),
        author: pr
            .user
            .as_ref()
            .map(|u| u.login.clone())
            .unwrap_or_else(|| "unknown".to_string()),
        created_at: pr.created_at.unwrap_or_else(chrono::Utc::now),
        html_url: pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
    }
}

/// Keep only the label name; colour and description are not used
fn convert_label(label: octocrab::models::Label) -> Label {
    Label::named(label.name)
}
