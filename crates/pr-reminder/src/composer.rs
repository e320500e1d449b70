//! Message composer
//!
//! Builds the Slack mrkdwn report for one repository.

use crate::classifier::ClassifiedPullRequests;
use crate::clock::Clock;
use crate::domain_models::{PullRequest, RepositoryConfig};
use crate::reminder::{hours_old, reminder_text};
use chrono::{DateTime, Local, Timelike, Utc};

/// Line shown when a repository has no open pull requests
pub const ALL_CLEAR: &str = ">No active pull requests :tada:";

/// Minutes until the next top-of-the-hour deployment
///
/// Deployments are assumed to run hourly on the local wall clock, so this
/// is a display estimate only. At minute 0 the next deployment is a full
/// hour away.
pub fn minutes_until_next_deploy<T: Timelike>(now: &T) -> u32 {
    60 - now.minute()
}

/// Compose the report for `repo` from its classified pull requests
///
/// The clock is read once, so every age in the report is relative to the
/// same instant.
pub fn compose(
    classified: &ClassifiedPullRequests,
    repo: &RepositoryConfig,
    clock: &dyn Clock,
) -> String {
    let now = clock.now();
    let slug = format!("{}-{}", repo.owner, repo.name);

    let mut message = format!("*The current status of github {slug} is:*\n");

    if classified.is_empty() {
        message.push_str(ALL_CLEAR);
        message.push('\n');
    } else {
        message.push_str(&format!(
            ">Outstanding pull requests: {}\n",
            classified.total()
        ));
        message.push_str(&format!(">Don't merge now: {}\n", classified.blocked.len()));
        message.push_str(&format!(
            ">Review needed: {}\n",
            classified.needs_review.len()
        ));

        if !classified.needs_review.is_empty() {
            message.push_str("\n*Review needed:*\n");
            for (index, pr) in classified.needs_review.iter().enumerate() {
                message.push_str(&review_entry(index + 1, pr, now));
            }
        }
    }

    if repo.deployment_footer {
        message.push_str(&format!(
            "\n*:stopwatch: Next automatic deployment for {slug} in {} minutes :stopwatch:*",
            minutes_until_next_deploy(&now.with_timezone(&Local))
        ));
    }

    message
}

/// One numbered entry of the review list
fn review_entry(position: usize, pr: &PullRequest, now: DateTime<Utc>) -> String {
    let body = pr
        .summary_body()
        .map(|body| format!(" - {body}"))
        .unwrap_or_default();
    let age = reminder_text(hours_old(pr.created_at, now));

    format!(
        ">*({position}) {title}*{body}\n>_Raised by {author} {age}_\n>{url}\n\n",
        title = pr.title,
        author = pr.author,
        url = pr.html_url,
    )
}
