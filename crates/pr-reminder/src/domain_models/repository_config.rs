//! Repository configuration model
//!
//! The resolved, per-run view of one `[[repositories]]` entry.

use pr_reminder_config::ReminderConfig;
use std::collections::HashSet;

/// A monitored repository with every default already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Organization or owner name
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Slack channel receiving the report
    pub channel: String,
    /// Bot display name
    pub display_name: String,
    /// Bot icon (emoji shortcode)
    pub icon: String,
    /// Labels that block merging
    pub ignore_labels: HashSet<String>,
    /// Append the next-deployment countdown
    pub deployment_footer: bool,
}

impl RepositoryConfig {
    /// Resolve every configured repository, in configuration order
    pub fn from_config(config: &ReminderConfig) -> Vec<Self> {
        config
            .repositories
            .iter()
            .map(|entry| Self {
                owner: config.company.clone(),
                name: entry.name.clone(),
                channel: entry.channel.clone(),
                display_name: entry.effective_display_name(&config.slack).to_string(),
                icon: entry.effective_icon(&config.slack).to_string(),
                ignore_labels: entry.ignore_labels.iter().cloned().collect(),
                deployment_footer: entry.deployment_footer,
            })
            .collect()
    }

    /// Display name for the repository (owner/name)
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}
