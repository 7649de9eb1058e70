use crate::gemini::{GenerationConfig, DEFAULT_BASE_URL};
use crate::retry::RetryPolicy;
use crate::settings::DEFAULT_MODEL;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Retry policy parameters (optional `[retry]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry, in milliseconds.
    pub initial_delay_ms: u64,
    /// Maximum backoff delay, in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_retries: policy.max_retries,
            initial_delay_ms: policy.initial_delay.as_millis() as u64,
            max_delay_ms: policy.max_delay.as_millis() as u64,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
        }
    }
}

/// Sampling parameters sent with every request (optional `[generation]` section).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
    /// Structured-output MIME type; `application/json` asks for bare JSON.
    pub response_mime_type: String,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 1024,
            response_mime_type: "application/json".to_string(),
        }
    }
}

impl SamplingConfig {
    pub fn to_generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: Some(self.temperature),
            max_output_tokens: Some(self.max_output_tokens),
            response_mime_type: Some(self.response_mime_type.clone()),
        }
    }
}

/// Global configuration loaded from `~/.config/autopost/config.toml`.
///
/// The API key is deliberately not part of the file; it only comes from the
/// environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopostConfig {
    /// Model used when neither `--model` nor `GEMINI_MODEL` is given.
    pub model: String,
    /// API root; override to point at a proxy or a local test server.
    pub base_url: String,
    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    pub retry: Option<RetryConfig>,
    /// Optional sampling parameters; if missing, built-in defaults are used.
    pub generation: Option<SamplingConfig>,
}

impl Default for AutopostConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 120,
            retry: None,
            generation: None,
        }
    }
}

impl AutopostConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry.clone().unwrap_or_default().to_policy()
    }

    pub fn generation_config(&self) -> GenerationConfig {
        self.generation
            .clone()
            .unwrap_or_default()
            .to_generation_config()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs =
        xdg::BaseDirectories::with_prefix("autopost").context("locating XDG config directory")?;
    xdg_dirs
        .place_config_file("config.toml")
        .context("creating XDG config directory")
}

/// Load configuration from disk, creating a default file if none exists.
///
/// The file is an optional layer: when the config directory is unusable the
/// built-in defaults are used and a warning is logged.
pub fn load_or_init() -> Result<AutopostConfig> {
    match config_path() {
        Ok(path) => load_or_init_at(&path),
        Err(err) => {
            tracing::warn!("config directory unavailable, using defaults: {:#}", err);
            Ok(AutopostConfig::default())
        }
    }
}

/// Load `path`, first writing a default file there if none exists. Failing to
/// write the default only logs a warning.
pub fn load_or_init_at(path: &Path) -> Result<AutopostConfig> {
    if !path.exists() {
        let default_cfg = AutopostConfig::default();
        match write_config(path, &default_cfg) {
            Ok(()) => tracing::info!("created default config at {}", path.display()),
            Err(err) => tracing::warn!("using default config: {:#}", err),
        }
        return Ok(default_cfg);
    }

    load_from(path)
}

fn write_config(path: &Path, cfg: &AutopostConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating config dir {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("writing config {}", path.display()))
}

/// Load configuration from an explicit path. A missing file yields defaults.
pub fn load_from(path: &Path) -> Result<AutopostConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(AutopostConfig::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: AutopostConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
