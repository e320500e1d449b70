//! GitHub client trait
//!
//! This module defines the `GitHubClient` trait that the reminder pipeline
//! consumes. Authentication, pagination and rate limits are the concern of
//! the implementation, not of its callers.

use crate::types::{Label, PullRequest};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the read-only interface the reminder bot needs from GitHub.
/// Implementations can hit the real API or serve canned data in tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, PullRequest};
///
/// async fn list_prs(client: &dyn GitHubClient) -> anyhow::Result<Vec<PullRequest>> {
///     client.fetch_pull_requests("rust-lang", "rust").await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch all open pull requests for a repository
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    ///
    /// # Returns
    ///
    /// Every open pull request, in the order GitHub lists them,
    /// or an error if the API call fails.
    async fn fetch_pull_requests(&self, owner: &str, repo: &str)
        -> anyhow::Result<Vec<PullRequest>>;

    /// Fetch the labels attached to an issue or pull request
    ///
    /// Pull requests share their number space with issues, so this uses
    /// the issue labels endpoint.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `number` - Pull request number
    async fn fetch_issue_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> anyhow::Result<Vec<Label>>;
}
