//! Top-level grader configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AccuracyConfig, BiasConfig, OracleConfig, RelevanceConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`GRADER_*`)
/// 2. Config file (`grader.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GraderConfig {
    pub oracle: OracleConfig,
    pub accuracy: AccuracyConfig,
    pub relevance: RelevanceConfig,
    pub bias: BiasConfig,
}

impl GraderConfig {
    /// Load configuration from a TOML file, apply `GRADER_*` overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut config: GraderConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Unknown keys are ignored.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: GraderConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides. `lookup` is injected so tests don't touch
    /// the process environment. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(size) = lookup("GRADER_BATCH_SIZE").and_then(|v| v.parse().ok()) {
            self.relevance.coherence_batch_size = size;
        }
        if let Some(model) = lookup("GRADER_ORACLE_MODEL") {
            self.oracle.model = model;
        }
        if let Some(endpoint) = lookup("GRADER_ORACLE_ENDPOINT") {
            self.oracle.endpoint = endpoint;
        }
        if let Some(secs) = lookup("GRADER_ORACLE_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.oracle.timeout_secs = secs;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.relevance.coherence_batch_size == 0 {
            return Err(invalid("relevance.coherence_batch_size", "must be greater than 0"));
        }
        let unit_fields = [
            ("accuracy.intervention_threshold", self.accuracy.intervention_threshold),
            ("relevance.fallback_score", self.relevance.fallback_score),
            ("relevance.strength_threshold", self.relevance.strength_threshold),
            ("bias.skew_threshold", self.bias.skew_threshold),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        if self.bias.context_window == 0 {
            return Err(invalid("bias.context_window", "must be greater than 0"));
        }
        if self.bias.balanced_ratio_min < 0.0
            || self.bias.balanced_ratio_min > self.bias.balanced_ratio_max
        {
            return Err(invalid(
                "bias.balanced_ratio_min",
                "must be non-negative and not exceed bias.balanced_ratio_max",
            ));
        }
        if self.oracle.timeout_secs == 0 {
            return Err(invalid("oracle.timeout_secs", "must be greater than 0"));
        }
        if !(0.0..=2.0).contains(&self.oracle.temperature) {
            return Err(invalid("oracle.temperature", "must be between 0.0 and 2.0"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
