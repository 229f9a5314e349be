// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    speakers_path: PathBuf,
    strict_slugs: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_speakers_path() -> PathBuf {
    PathBuf::from("data/speakers.json")
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{name} must be a boolean flag, got {other:?}"
        ))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Fails when a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. `from_env` delegates
    /// here; tests pass a map instead of mutating the process environment.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] for a blank `LISTEN_ADDR`, and
    /// [`ConfigError::Invalid`] for an unparseable `STRICT_SLUGS`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        if listen_addr.trim().is_empty() {
            return Err(ConfigError::Missing("LISTEN_ADDR"));
        }

        let speakers_path = lookup("SPEAKERS_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_speakers_path);

        let strict_slugs = lookup("STRICT_SLUGS")
            .map(|value| parse_flag("STRICT_SLUGS", &value))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            speakers_path,
            strict_slugs,
        })
    }

    #[must_use]
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    #[must_use]
    pub const fn speakers_path(&self) -> &PathBuf {
        &self.speakers_path
    }

    /// Reject rosters in which two speakers share a slug instead of serving
    /// the first one.
    #[must_use]
    pub const fn strict_slugs(&self) -> bool {
        self.strict_slugs
    }
}
