//! Label classifier
//!
//! Splits enriched pull requests into those waiting for review and those
//! blocked from merging by an ignore label.

use crate::domain_models::PullRequest;
use std::collections::HashSet;

/// Pull requests of one repository, split by merge readiness
///
/// Both buckets keep the order of the classifier's input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedPullRequests {
    /// No ignore label attached
    pub needs_review: Vec<PullRequest>,
    /// At least one ignore label attached
    pub blocked: Vec<PullRequest>,
}

impl ClassifiedPullRequests {
    /// Total number of open pull requests
    pub fn total(&self) -> usize {
        self.needs_review.len() + self.blocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Partition `pull_requests` by the ignore-label policy
///
/// A pull request is blocked as soon as one of its labels is in
/// `ignore_labels` (exact name match); otherwise it needs review.
pub fn classify(
    pull_requests: Vec<PullRequest>,
    ignore_labels: &HashSet<String>,
) -> ClassifiedPullRequests {
    let (blocked, needs_review): (Vec<_>, Vec<_>) = pull_requests
        .into_iter()
        .partition(|pr| pr.has_any_label(ignore_labels));

    ClassifiedPullRequests {
        needs_review,
        blocked,
    }
}
