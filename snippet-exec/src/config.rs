use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::Error;

/// Language id the public Judge0 instance uses for JavaScript (Node.js).
pub const DEFAULT_LANGUAGE_ID: u32 = 63;

pub const API_KEY_VAR: &str = "EXECUTION_API_KEY";
pub const BASE_URL_VAR: &str = "EXECUTION_BASE_URL";
pub const HOST_VAR: &str = "EXECUTION_HOST";
pub const LANGUAGE_ID_VAR: &str = "EXECUTION_LANGUAGE_ID";
pub const TIMEOUT_VAR: &str = "EXECUTION_TIMEOUT_SECS";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Base URL of the execution API, without a trailing slash
    pub base_url: String,

    /// API key sent as `X-RapidAPI-Key`
    pub api_key: String,

    /// Host identifier sent as `X-RapidAPI-Host`
    pub host: String,

    /// Language used when a request does not name one
    pub default_language_id: u32,

    /// Per-request timeout. `None` leaves it to the HTTP transport.
    #[serde(default)]
    pub request_timeout: Option<Duration>,
}

impl ExecutionConfig {
    pub fn new(api_key: String, base_url: String, host: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            host,
            default_language_id: DEFAULT_LANGUAGE_ID,
            request_timeout: None,
        }
    }

    pub fn with_default_language_id(mut self, language_id: u32) -> Self {
        self.default_language_id = language_id;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| lookup(name).ok_or_else(|| Error::MissingEnvVar(name.into()));

        let mut config = Self::new(
            required(API_KEY_VAR)?,
            required(BASE_URL_VAR)?,
            required(HOST_VAR)?,
        );

        if let Some(raw) = lookup(LANGUAGE_ID_VAR) {
            let language_id = raw.trim().parse::<u32>().map_err(|e| {
                Error::Configuration(format!("{} must be an integer: {}", LANGUAGE_ID_VAR, e))
            })?;
            config = config.with_default_language_id(language_id);
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                Error::Configuration(format!("{} must be a number of seconds: {}", TIMEOUT_VAR, e))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.api_key.is_empty() {
            return Err(Error::Configuration("API key must not be empty".into()));
        }
        if self.base_url.is_empty() {
            return Err(Error::Configuration("base URL must not be empty".into()));
        }
        if self.host.is_empty() {
            return Err(Error::Configuration("host must not be empty".into()));
        }
        Ok(())
    }
}
