//! Read-only GitHub API client
//!
//! This crate provides the hosting-API side of the reminder bot: a small
//! trait covering the two calls the bot needs, and an octocrab-backed
//! implementation of it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_pull_requests()                         │
//! │  - fetch_issue_labels()                          │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐      ┌───────────────┐
//!              │ OctocrabClient  │◄─────│ TokenResolver │
//!              │ (direct API)    │      │ (credentials) │
//!              └─────────────────┘      └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient, TokenResolver};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OctocrabClient::connect(None, &TokenResolver::new()).await?;
//!
//! for pr in client.fetch_pull_requests("rust-lang", "rust").await? {
//!     let labels = client.fetch_issue_labels("rust-lang", "rust", pr.number).await?;
//!     println!("#{} has {} labels", pr.number, labels.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod token_resolver;
pub mod types;

/// Default GitHub host (public GitHub)
pub const DEFAULT_HOST: &str = "github.com";

pub use client::GitHubClient;
pub use octocrab_client::OctocrabClient;
pub use token_resolver::TokenResolver;
pub use types::{Label, PullRequest};
