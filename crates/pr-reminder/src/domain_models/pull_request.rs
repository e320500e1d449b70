//! Pull Request model
//!
//! A pull request together with its labels. The only way to build one from
//! API data is [`PullRequest::enrich`], so every instance the pipeline sees
//! has had its labels fetched exactly once.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// An open pull request with its labels attached
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// PR body/description
    pub body: Option<String>,
    /// Author username
    pub author: String,
    /// When the PR was created
    pub created_at: DateTime<Utc>,
    /// HTML URL for viewing the PR in browser
    pub html_url: String,
    /// Label names, in the order GitHub returned them
    pub labels: Vec<String>,
}

impl PullRequest {
    /// Attach fetched labels to a listed pull request
    pub fn enrich(pr: gh_client::PullRequest, labels: Vec<gh_client::Label>) -> Self {
        Self {
            number: pr.number,
            title: pr.title,
            body: pr.body,
            author: pr.author,
            created_at: pr.created_at,
            html_url: pr.html_url,
            labels: labels.into_iter().map(|label| label.name).collect(),
        }
    }

    /// Whether any attached label is in `names` (exact match)
    pub fn has_any_label(&self, names: &HashSet<String>) -> bool {
        self.labels.iter().any(|label| names.contains(label))
    }

    /// Body text worth showing, `None` when absent or blank
    pub fn summary_body(&self) -> Option<&str> {
        self.body
            .as_deref()
            .map(str::trim)
            .filter(|body| !body.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed(body: Option<&str>) -> gh_client::PullRequest {
        gh_client::PullRequest {
            number: 7,
            title: "Add feature".to_string(),
            body: body.map(str::to_string),
            author: "bob".to_string(),
            created_at: Utc::now(),
            html_url: "https://github.com/acme/api/pull/7".to_string(),
        }
    }

    #[test]
    fn test_enrich_keeps_label_order() {
        let pr = PullRequest::enrich(
            listed(None),
            vec![
                gh_client::Label::named("wip"),
                gh_client::Label::named("backend"),
            ],
        );

        assert_eq!(pr.number, 7);
        assert_eq!(pr.labels, vec!["wip".to_string(), "backend".to_string()]);
    }

    #[test]
    fn test_has_any_label_is_exact() {
        let pr = PullRequest::enrich(listed(None), vec![gh_client::Label::named("WIP")]);

        let lower: HashSet<String> = ["wip".to_string()].into();
        let upper: HashSet<String> = ["WIP".to_string()].into();

        assert!(!pr.has_any_label(&lower));
        assert!(pr.has_any_label(&upper));
        assert!(!pr.has_any_label(&HashSet::new()));
    }

    #[test]
    fn test_summary_body() {
        let blank = PullRequest::enrich(listed(Some("   ")), vec![]);
        let absent = PullRequest::enrich(listed(None), vec![]);
        let present = PullRequest::enrich(listed(Some(" Adds a thing \n")), vec![]);

        assert_eq!(blank.summary_body(), None);
        assert_eq!(absent.summary_body(), None);
        assert_eq!(present.summary_body(), Some("Adds a thing"));
    }
}
