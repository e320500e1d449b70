//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API.
//! They are intentionally separate from application domain models
//! to keep this crate pure and reusable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An open pull request from the GitHub API
///
/// The list endpoint is the only source, so labels are not part of this
/// type; they are fetched separately per pull request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,

    /// PR body/description
    pub body: Option<String>,

    /// Author's GitHub username
    pub author: String,

    /// When the PR was created
    pub created_at: DateTime<Utc>,

    /// PR URL for opening in browser
    pub html_url: String,
}

/// A label attached to an issue or pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name, matched exactly against ignore lists
    pub name: String,
}

impl Label {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
