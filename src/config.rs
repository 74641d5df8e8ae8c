//! Credentials and endpoints read from the environment.
//!
//! Both loaders take a lookup function so that tests can feed a fixed map
//! instead of touching the process environment.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

pub const DEFAULT_TOGGL_API_URL: &str = "https://api.track.toggl.com/api/v9";
pub const DEFAULT_TRELLO_API_URL: &str = "https://api.trello.com/1";

#[derive(Error, Diagnostic, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} environment variable is required")]
    #[diagnostic(
        code(app_vitals_mcp::config::missing),
        help("Export {name} before starting the server.")
    )]
    Missing { name: &'static str },

    #[error("{name} has an invalid value: {value}")]
    #[diagnostic(code(app_vitals_mcp::config::invalid))]
    Invalid { name: &'static str, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Clone)]
pub struct TogglConfig {
    pub api_token: String,
    pub workspace_id: Option<i64>,
    pub api_url: String,
}

impl TogglConfig {
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let api_token = required(&lookup, "TOGGL_API_TOKEN")?;

        let workspace_id = match non_empty(&lookup, "TOGGL_WORKSPACE_ID") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| ConfigError::Invalid {
                        name: "TOGGL_WORKSPACE_ID",
                        value: raw.clone(),
                    })?,
            ),
            None => None,
        };

        let api_url = non_empty(&lookup, "TOGGL_API_URL")
            .unwrap_or_else(|| DEFAULT_TOGGL_API_URL.to_string());

        Ok(Self {
            api_token,
            workspace_id,
            api_url,
        })
    }
}

impl fmt::Debug for TogglConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TogglConfig")
            .field("api_token", &"<redacted>")
            .field("workspace_id", &self.workspace_id)
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Clone)]
pub struct TrelloConfig {
    pub api_key: String,
    pub token: String,
    pub api_url: String,
}

impl TrelloConfig {
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let api_key = required(&lookup, "TRELLO_API_KEY")?;
        let token = required(&lookup, "TRELLO_TOKEN")?;
        let api_url = non_empty(&lookup, "TRELLO_API_URL")
            .unwrap_or_else(|| DEFAULT_TRELLO_API_URL.to_string());

        Ok(Self {
            api_key,
            token,
            api_url,
        })
    }
}

impl fmt::Debug for TrelloConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrelloConfig")
            .field("api_key", &"<redacted>")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|v| !v.trim().is_empty())
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &'static str) -> ConfigResult<String> {
    non_empty(lookup, name).ok_or(ConfigError::Missing { name })
}
