//! Configuration loaded from environment variables, optionally via a `.env`
//! file.
//!
//! ## Required
//! - `PORT` - Listen port
//! - `SLACK_BOT_TOKEN` - Sent verbatim as the `Authorization` header to Slack,
//!   so include the scheme, e.g. `Bearer xoxb-...`
//!
//! ## Optional
//! - `MELI_API_BASE` - Marketplace API base URL
//! - `SLACK_API_BASE` - Slack Web API base URL

use crate::{meli, slack};
use std::{env, fmt};

/// Everything needed to start the server, validated up front.
pub struct Config {
    pub port: u16,
    pub slack_token: slack::SlackBotToken,
    pub meli_api_base: String,
    pub slack_api_base: String,
}

pub enum ConfigError {
    MissingEnvVar(&'static str),
    InvalidEnvVar(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingEnvVar(k) => write!(f, "${} must be set", k),
            ConfigError::InvalidEnvVar(k, e) => write!(f, "Invalid ${}: {}", k, e),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| env::var(k).ok())
    }

    fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values are as good as unset.
        let required = |k: &'static str| {
            var(k)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingEnvVar(k))
        };

        let port = required("PORT")?
            .parse()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT", format!("{}", e)))?;

        let slack_token = slack::SlackBotToken(required("SLACK_BOT_TOKEN")?);

        let optional = |k: &'static str, default: &str| {
            var(k)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.into())
        };

        Ok(Config {
            port,
            slack_token,
            meli_api_base: optional("MELI_API_BASE", meli::api::API_BASE),
            slack_api_base: optional("SLACK_API_BASE", slack::api::API_BASE),
        })
    }
}
