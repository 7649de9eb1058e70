//! Resolved run settings: config file + environment + CLI overrides.
//!
//! Everything the generate path needs is gathered here once at startup so
//! nothing below reads the process environment.

use crate::config::AutopostConfig;
use crate::gemini::GenerationConfig;
use crate::retry::RetryPolicy;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// API credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not set")]
    MissingApiKey { var: &'static str },
}

/// Command-line overrides applied on top of file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub model: Option<String>,
    pub max_retries: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub api_key: ApiKey,
    pub model: String,
    pub base_url: String,
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
    pub generation: GenerationConfig,
}

impl RunSettings {
    /// Resolve settings using `lookup` for environment variables. Empty
    /// values count as unset.
    pub fn resolve<F>(
        cfg: &AutopostConfig,
        overrides: &Overrides,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = var(API_KEY_VAR)
            .map(ApiKey::new)
            .ok_or(ConfigError::MissingApiKey { var: API_KEY_VAR })?;
        let model = overrides
            .model
            .clone()
            .or_else(|| var(MODEL_VAR))
            .unwrap_or_else(|| cfg.model.clone());

        let mut retry = cfg.retry_policy();
        if let Some(n) = overrides.max_retries {
            retry.max_retries = n;
        }

        Ok(Self {
            api_key,
            model,
            base_url: cfg.base_url.clone(),
            request_timeout: cfg.request_timeout(),
            retry,
            generation: cfg.generation_config(),
        })
    }

    /// Resolve settings against the process environment.
    pub fn from_env(cfg: &AutopostConfig, overrides: &Overrides) -> Result<Self, ConfigError> {
        Self::resolve(cfg, overrides, |name| std::env::var(name).ok())
    }
}
