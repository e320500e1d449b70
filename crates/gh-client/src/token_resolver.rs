//! GitHub credentials for an unattended run
//!
//! Lookup order for a host:
//! 1. `GITHUB_TOKEN_{HOST}`, e.g. `GITHUB_TOKEN_GHE_EXAMPLE_COM`
//! 2. `gh auth token --hostname {host}`, when the CLI is installed
//! 3. `GITHUB_TOKEN` then `GH_TOKEN`, for github.com only

use crate::DEFAULT_HOST;
use anyhow::{bail, Result};
use log::debug;

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Finds the token used to authenticate against a GitHub host
pub struct TokenResolver {
    env: EnvLookup,
}

impl TokenResolver {
    /// Resolver reading the process environment
    pub fn new() -> Self {
        Self::with_env(|key| std::env::var(key).ok())
    }

    /// Resolver reading variables through `env`
    pub fn with_env(env: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self { env: Box::new(env) }
    }

    /// Token for `host`, `None` meaning github.com
    pub async fn get_token(&self, host: Option<&str>) -> Result<String> {
        let host = host.unwrap_or(DEFAULT_HOST);
        let host_key = host_env_key(host);

        if let Some(token) = self.var(&host_key) {
            debug!("GitHub token for {} from {}", host, host_key);
            return Ok(token);
        }

        if let Some(token) = gh_cli_token(host).await {
            debug!("GitHub token for {} from gh CLI", host);
            return Ok(token);
        }

        if host == DEFAULT_HOST {
            if let Some(token) = ["GITHUB_TOKEN", "GH_TOKEN"]
                .into_iter()
                .find_map(|key| self.var(key))
            {
                debug!("GitHub token for {} from GITHUB_TOKEN/GH_TOKEN", host);
                return Ok(token);
            }
        }

        bail!(
            "no GitHub token for {host}: set {host_key}{generic} or run `gh auth login --hostname {host}`",
            generic = if host == DEFAULT_HOST { " or GITHUB_TOKEN" } else { "" },
        )
    }

    /// A set, non-blank variable
    fn var(&self, key: &str) -> Option<String> {
        (self.env)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Ask an authenticated `gh` CLI; a missing CLI is not an error on cron hosts
async fn gh_cli_token(host: &str) -> Option<String> {
    let output = match tokio::process::Command::new("gh")
        .args(["auth", "token", "--hostname", host])
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            debug!("gh CLI unavailable: {}", e);
            return None;
        }
    };

    if !output.status.success() {
        debug!("gh CLI has no token for {}", host);
        return None;
    }

    String::from_utf8(output.stdout)
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn host_env_key(host: &str) -> String {
    format!(
        "GITHUB_TOKEN_{}",
        host.replace(['.', '-'], "_").to_uppercase()
    )
}
