//! Reminder configuration
//!
//! Configuration loaded from `.pr-reminder.toml`.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Environment variable overriding `slack.webhook_url`
pub const ENV_SLACK_WEBHOOK_URL: &str = "SLACK_WEBHOOK_URL";

/// Environment variable enabling dry-run mode (`true` or `1`)
pub const ENV_DRY_RUN: &str = "PR_REMINDER_DRY_RUN";

/// Top-level configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReminderConfig {
    /// Organization (or user) owning every configured repository
    pub company: String,

    /// GitHub Enterprise host; unset means github.com
    #[serde(default)]
    pub github_host: Option<String>,

    /// How many repositories are processed at the same time
    #[serde(default = "default_max_concurrent_repositories")]
    pub max_concurrent_repositories: usize,

    /// How many label requests run at the same time within one repository
    #[serde(default = "default_label_fetch_concurrency")]
    pub label_fetch_concurrency: usize,

    /// Log messages instead of posting them
    #[serde(default)]
    pub dry_run: bool,

    /// Slack webhook and default bot identity
    #[serde(default)]
    pub slack: SlackSettings,

    /// Repositories to report on, in report order
    #[serde(default)]
    pub repositories: Vec<RepositoryEntry>,
}

/// Slack delivery settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SlackSettings {
    /// Incoming webhook URL
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// Default bot display name
    #[serde(default = "default_username")]
    pub username: String,

    /// Default bot icon (emoji shortcode)
    #[serde(default = "default_icon_emoji")]
    pub icon_emoji: String,

    /// Webhook request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// One monitored repository
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    /// Repository name (without the owner)
    pub name: String,

    /// Slack channel receiving this repository's report
    pub channel: String,

    /// Bot display name override
    #[serde(default)]
    pub display_name: Option<String>,

    /// Bot icon override
    #[serde(default)]
    pub icon: Option<String>,

    /// Labels that mark a pull request as not ready to merge
    #[serde(default)]
    pub ignore_labels: Vec<String>,

    /// Append the next-deployment countdown to the report
    #[serde(default)]
    pub deployment_footer: bool,
}

fn default_max_concurrent_repositories() -> usize {
    4
}

fn default_label_fetch_concurrency() -> usize {
    8
}

fn default_username() -> String {
    "PR Reminder".to_string()
}

fn default_icon_emoji() -> String {
    ":robot_face:".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for SlackSettings {
    fn default() -> Self {
        Self {
            webhook_url: None,
            username: default_username(),
            icon_emoji: default_icon_emoji(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ReminderConfig {
    /// Locate, parse, override from the environment and validate
    pub fn load() -> Result<Self> {
        let path = crate::locate_config_file().with_context(|| {
            format!(
                "No config file found. Create {} or set {}",
                crate::CONFIG_FILE,
                crate::ENV_CONFIG_PATH
            )
        })?;

        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        log::info!(
            "Loaded config from {} ({} repositories)",
            path.display(),
            config.repositories.len()
        );
        Ok(config)
    }

    /// Parse a config file without overrides or validation
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_SLACK_WEBHOOK_URL).filter(|u| !u.trim().is_empty()) {
            log::debug!("Using Slack webhook from {}", ENV_SLACK_WEBHOOK_URL);
            self.slack.webhook_url = Some(url);
        }

        if let Some(value) = lookup(ENV_DRY_RUN) {
            self.dry_run = value.eq_ignore_ascii_case("true") || value == "1";
        }
    }

    /// Check the configuration is usable for a run
    pub fn validate(&self) -> Result<()> {
        if self.company.trim().is_empty() {
            bail!("`company` must not be empty");
        }

        if self.repositories.is_empty() {
            bail!("At least one [[repositories]] entry is required");
        }

        if self.max_concurrent_repositories == 0 {
            bail!("`max_concurrent_repositories` must be at least 1");
        }

        if self.label_fetch_concurrency == 0 {
            bail!("`label_fetch_concurrency` must be at least 1");
        }

        let mut seen = HashSet::new();
        for entry in &self.repositories {
            if entry.name.trim().is_empty() {
                bail!("Repository `name` must not be empty");
            }
            if !seen.insert(entry.name.as_str()) {
                bail!("Repository '{}' is configured more than once", entry.name);
            }
            if entry.channel.trim().is_empty() {
                bail!("Repository '{}' has an empty `channel`", entry.name);
            }
        }

        let has_webhook = self
            .slack
            .webhook_url
            .as_deref()
            .is_some_and(|u| !u.trim().is_empty());
        if !self.dry_run && !has_webhook {
            bail!(
                "No Slack webhook configured. Set `slack.webhook_url` or {}",
                ENV_SLACK_WEBHOOK_URL
            );
        }

        Ok(())
    }
}

impl RepositoryEntry {
    /// Display name for this repository's bot, falling back to `slack.username`
    pub fn effective_display_name<'a>(&'a self, slack: &'a SlackSettings) -> &'a str {
        self.display_name.as_deref().unwrap_or(&slack.username)
    }

    /// Icon for this repository's bot, falling back to `slack.icon_emoji`
    pub fn effective_icon<'a>(&'a self, slack: &'a SlackSettings) -> &'a str {
        self.icon.as_deref().unwrap_or(&slack.icon_emoji)
    }
}
