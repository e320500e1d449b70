//! Pull request fetch and label enrichment.

use crate::domain_models::{PullRequest, RepositoryConfig};
use crate::error::PipelineError;
use futures::{stream, StreamExt, TryStreamExt};
use gh_client::GitHubClient;
use log::debug;

/// List the open pull requests of `repo` and attach their labels
///
/// Label requests run concurrently, at most `label_concurrency` at a time.
/// The result keeps the listing order. The first failed label request
/// aborts the whole repository; no partially enriched list is returned.
pub async fn fetch_and_enrich(
    client: &dyn GitHubClient,
    repo: &RepositoryConfig,
    label_concurrency: usize,
) -> Result<Vec<PullRequest>, PipelineError> {
    let listed = client
        .fetch_pull_requests(&repo.owner, &repo.name)
        .await
        .map_err(|source| PipelineError::Fetch {
            repository: repo.full_name(),
            source,
        })?;

    debug!(
        "{}: {} open pull requests, fetching labels",
        repo.full_name(),
        listed.len()
    );

    stream::iter(listed)
        .map(|pr| async move {
            let number = pr.number;
            client
                .fetch_issue_labels(&repo.owner, &repo.name, number)
                .await
                .map(|labels| PullRequest::enrich(pr, labels))
                .map_err(|source| PipelineError::LabelFetch {
                    repository: repo.full_name(),
                    pr_number: number,
                    source,
                })
        })
        .buffered(label_concurrency.max(1))
        .try_collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{listed_pr, repo_config, FakeGitHub};
    use std::time::Duration;

    #[tokio::test]
    async fn test_enriches_every_pull_request() {
        let github = FakeGitHub::default()
            .with_prs("api", vec![listed_pr(1, "One"), listed_pr(2, "Two")])
            .with_labels("api", 1, &["wip"])
            .with_labels("api", 2, &["backend", "ready"]);

        let prs = fetch_and_enrich(&github, &repo_config("api", &[]), 4)
            .await
            .unwrap();

        assert_eq!(prs.len(), 2);
        assert_eq!(prs[0].labels, vec!["wip".to_string()]);
        assert_eq!(
            prs[1].labels,
            vec!["backend".to_string(), "ready".to_string()]
        );
    }

    #[tokio::test]
    async fn test_preserves_listing_order_when_labels_resolve_out_of_order() {
        let github = FakeGitHub::default()
            .with_prs(
                "api",
                vec![listed_pr(10, "Slow"), listed_pr(20, "Fast"), listed_pr(30, "Medium")],
            )
            .with_label_delay("api", 10, Duration::from_millis(40))
            .with_label_delay("api", 30, Duration::from_millis(20));

        let prs = fetch_and_enrich(&github, &repo_config("api", &[]), 3)
            .await
            .unwrap();

        let numbers: Vec<u64> = prs.iter().map(|pr| pr.number).collect();
        assert_eq!(numbers, vec![10, 20, 30]);
    }

    #[tokio::test]
    async fn test_empty_listing_makes_no_label_requests() {
        let github = FakeGitHub::default().with_prs("api", vec![]);

        let prs = fetch_and_enrich(&github, &repo_config("api", &[]), 4)
            .await
            .unwrap();

        assert!(prs.is_empty());
        assert_eq!(github.label_requests(), 0);
    }

    #[tokio::test]
    async fn test_listing_failure_is_fetch_error() {
        let github = FakeGitHub::default().failing_listing("api");

        let err = fetch_and_enrich(&github, &repo_config("api", &[]), 4)
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Fetch { ref repository, .. } if repository == "acme/api"));
    }

    #[tokio::test]
    async fn test_label_failure_names_the_pull_request() {
        let github = FakeGitHub::default()
            .with_prs("api", vec![listed_pr(1, "One"), listed_pr(2, "Two")])
            .failing_labels("api", 2);

        let err = fetch_and_enrich(&github, &repo_config("api", &[]), 4)
            .await
            .unwrap_err();

        match err {
            PipelineError::LabelFetch { pr_number, .. } => assert_eq!(pr_number, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
