// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: String,
    user_agent: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_base_url() -> String {
    "http://localhost:8000".into()
}

fn default_user_agent() -> String {
    format!("wiki-articles/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Build configuration from environment variables. Loading a dotenv file
    /// is left to the binary's bootstrap.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("ARTICLES_API_URL").unwrap_or_else(default_base_url);
        let user_agent = lookup("ARTICLES_USER_AGENT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_user_agent);

        Ok(Self {
            base_url: normalize_base_url(&base_url)?,
            user_agent,
        })
    }

    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            user_agent: default_user_agent(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Missing("ARTICLES_API_URL"));
    }
    let url = reqwest::Url::parse(trimmed)
        .map_err(|err| ConfigError::Invalid(format!("ARTICLES_API_URL `{trimmed}`: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid(format!(
            "ARTICLES_API_URL must use http or https, got `{}`",
            url.scheme()
        )));
    }
    Ok(trimmed.to_owned())
}
