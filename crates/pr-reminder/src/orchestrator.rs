//! Run orchestrator
//!
//! Fans the per-repository pipeline out over every configured repository
//! and collects the outcomes once all of them have settled.

use crate::domain_models::RepositoryConfig;
use crate::error::PipelineError;
use crate::pipeline::{Delivered, Pipeline};
use futures::{stream, StreamExt};
use log::{error, info, warn};

/// Outcome of one repository's pipeline
#[derive(Debug)]
pub struct RepositoryReport {
    /// Repository (owner/name)
    pub repository: String,
    pub outcome: Result<Delivered, PipelineError>,
}

/// Aggregate result of a run, in configuration order
#[derive(Debug, Default)]
pub struct RunReport {
    pub repositories: Vec<RepositoryReport>,
}

impl RunReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &RepositoryReport> {
        self.repositories.iter().filter(|r| r.outcome.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &RepositoryReport> {
        self.repositories.iter().filter(|r| r.outcome.is_err())
    }

    /// Every repository delivered its report
    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }

    /// Log one line per repository and a closing summary
    pub fn log_summary(&self) {
        for report in &self.repositories {
            match &report.outcome {
                Ok(delivered) => info!(
                    "{}: delivered ({} need review, {} blocked)",
                    report.repository, delivered.needs_review, delivered.blocked
                ),
                Err(err) => error!("{}", err.describe()),
            }
        }

        if self.is_success() {
            info!("Run finished: {} delivered", self.succeeded().count());
        } else {
            warn!(
                "Run finished: {} delivered, {} failed",
                self.succeeded().count(),
                self.failed().count()
            );
        }
    }
}

/// Run `pipeline` for every repository, at most `max_concurrent` at a time
///
/// A failing repository never cancels the others. Nothing is retried.
pub async fn run_all(
    pipeline: &Pipeline<'_>,
    repositories: &[RepositoryConfig],
    max_concurrent: usize,
) -> RunReport {
    info!(
        "Checking {} repositories ({} at a time)",
        repositories.len(),
        max_concurrent.max(1)
    );

    let reports: Vec<RepositoryReport> = stream::iter(repositories)
        .map(|repo| async move {
            RepositoryReport {
                repository: repo.full_name(),
                outcome: pipeline.run(repo).await,
            }
        })
        .buffered(max_concurrent.max(1))
        .collect()
        .await;

    RunReport {
        repositories: reports,
    }
}
