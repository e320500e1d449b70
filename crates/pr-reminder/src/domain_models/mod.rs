//! Domain models
//!
//! Core domain types used by the reminder pipeline.
//! These are separate from the GitHub API transfer objects.

pub mod pull_request;
pub mod repository_config;

pub use pull_request::PullRequest;
pub use repository_config::RepositoryConfig;
