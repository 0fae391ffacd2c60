//! Configuration Management
//!
//! Connection settings for [`HttpSession`](crate::HttpSession), read from
//! `<config dir>/botman/config.json` and overridden by environment variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_BASE_URL: &str = "BOTMAN_BASE_URL";
pub const ENV_ACCESS_TOKEN: &str = "BOTMAN_ACCESS_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "BOTMAN_TIMEOUT_SECS";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// API host, e.g. `https://akab-xxxx.luna.akamaiapis.net`
    #[serde(default)]
    pub base_url: String,
    /// Bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Whole-request timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("botman").join("config.json"))
    }

    /// Load configuration from disk, then apply environment overrides
    ///
    /// A missing or unreadable file yields the defaults.
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|err| {
                tracing::warn!("ignoring config file {:?}: {:#}", path, err);
                Self::default()
            }),
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Override fields from variables returned by `lookup`
    ///
    /// An unparseable timeout is ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(token) = lookup(ENV_ACCESS_TOKEN) {
            self.access_token = Some(token);
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            match timeout.parse() {
                Ok(secs) => self.timeout_secs = Some(secs),
                Err(_) => tracing::warn!("ignoring {}={:?}", ENV_TIMEOUT_SECS, timeout),
            }
        }
    }
}
