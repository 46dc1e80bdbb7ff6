use serde::{Deserialize, Serialize};

use super::defaults;

/// Scoring oracle client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Chat-completions endpoint.
    pub endpoint: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Environment variable holding the bearer token.
    pub api_key_env: String,
    /// Sampling temperature for grading requests.
    pub temperature: f64,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Initial backoff in milliseconds (doubles each retry).
    pub initial_backoff_ms: u64,
    /// Backoff ceiling in milliseconds.
    pub max_backoff_ms: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_ORACLE_ENDPOINT.to_string(),
            model: defaults::DEFAULT_ORACLE_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_ORACLE_API_KEY_ENV.to_string(),
            temperature: defaults::DEFAULT_ORACLE_TEMPERATURE,
            timeout_secs: defaults::DEFAULT_ORACLE_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_ORACLE_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_ORACLE_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_ORACLE_MAX_BACKOFF_MS,
        }
    }
}
