//! Runtime configuration, read from the environment.

use anyhow::{Context, Result};
use std::time::Duration;

use crate::constants::{DEFAULT_TIMEOUT_SECS, NWS_API_BASE, USER_AGENT};

pub const API_BASE_VAR: &str = "NWS_API_BASE";
pub const USER_AGENT_VAR: &str = "NWS_USER_AGENT";
pub const TIMEOUT_VAR: &str = "NWS_TIMEOUT_SECS";

/// Settings for the NWS client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    pub api_base: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl WeatherConfig {
    /// Loads configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base) = non_blank(lookup(API_BASE_VAR)) {
            config.api_base = base.trim_end_matches('/').to_string();
        }

        if let Some(agent) = non_blank(lookup(USER_AGENT_VAR)) {
            config.user_agent = agent;
        }

        if let Some(raw) = non_blank(lookup(TIMEOUT_VAR)) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{TIMEOUT_VAR} must be a whole number of seconds, got '{raw}'"))?;
            if secs == 0 {
                anyhow::bail!("{TIMEOUT_VAR} must be greater than zero");
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
