use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_GATEWAY_URL, DEFAULT_LOG_FILE, ENV_GATEWAY_URL,
    ENV_LOG_FILE,
};

/// Runtime settings, read from `~/.hello-gateway/config.yaml`
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the gateway that routes `/api/*` to the backends
    pub gateway_url: String,
    /// Per-request timeout. Requests never time out when unset.
    pub request_timeout_secs: Option<u64>,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gateway_url: String::from(DEFAULT_GATEWAY_URL),
            request_timeout_secs: None,
            log_file: String::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load from the default location, then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::default_path())?;
        config.apply_overrides(
            std::env::var(ENV_GATEWAY_URL).ok(),
            std::env::var(ENV_LOG_FILE).ok(),
        );
        Ok(config)
    }

    /// Load from a file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_yaml::from_str::<Config>(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, gateway_url: Option<String>, log_file: Option<String>) {
        if let Some(url) = gateway_url.filter(|u| !u.trim().is_empty()) {
            self.gateway_url = url;
        }
        if let Some(file) = log_file.filter(|f| !f.trim().is_empty()) {
            self.log_file = file;
        }
    }
}
