//! Configuration for pr-reminder
//!
//! This crate provides:
//! - Config file discovery (env override, CWD, home directory)
//! - The TOML configuration model (`ReminderConfig`)
//! - Environment overrides and validation

pub mod config_file;
pub mod reminder_config;

pub use config_file::{locate_config_file, CONFIG_FILE, ENV_CONFIG_PATH};
pub use reminder_config::{
    ReminderConfig, RepositoryEntry, SlackSettings, ENV_DRY_RUN, ENV_SLACK_WEBHOOK_URL,
};
