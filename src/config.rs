//! Configuration loading
//!
//! Tunables live in a TOML file under the user's home directory and are
//! created with defaults on first run. The API credential is only ever
//! read from the environment, never written to disk.

use crate::consultation::RetryPolicy;
use crate::provider::DEFAULT_GEMINI_MODEL;
use crate::validation::ValidatorConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the Gemini API credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Gemini model name
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default)]
    pub input: InputLimits,

    #[serde(default)]
    pub retry: RetrySettings,

    /// Upper bound on a single provider attempt, in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputLimits {
    pub min_length: usize,
    pub max_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrySettings {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub jitter_ratio: f64,
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_length: 5,
            max_length: 2000,
        }
    }
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
            jitter_ratio: 0.25,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            input: InputLimits::default(),
            retry: RetrySettings::default(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating the file with
    /// defaults if it does not exist yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path (the `--config` flag)
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Write configuration to the given path, creating parents as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Default configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".consentright").join("config.toml"))
    }

    /// Read the API credential from the environment
    pub fn api_key() -> Result<String> {
        let key = std::env::var(API_KEY_ENV)
            .with_context(|| format!("{} not set; export your Gemini API key first", API_KEY_ENV))?;
        if key.trim().is_empty() {
            anyhow::bail!("{} is set but empty", API_KEY_ENV);
        }
        Ok(key)
    }

    /// Retry policy derived from the settings
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.retry.max_attempts.max(1),
            base_delay: Duration::from_millis(self.retry.base_delay_ms),
            jitter_ratio: self.retry.jitter_ratio.clamp(0.0, 1.0),
        }
    }

    /// Validator limits derived from the settings
    pub fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            min_length: self.input.min_length,
            max_length: self.input.max_length,
            ..ValidatorConfig::default()
        }
    }

    /// Per-attempt provider timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
