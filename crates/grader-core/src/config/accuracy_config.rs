use serde::{Deserialize, Serialize};

use super::defaults;

/// Accuracy scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccuracyConfig {
    /// Blocks scoring below this receive a correction request.
    pub intervention_threshold: f64,
}

impl Default for AccuracyConfig {
    fn default() -> Self {
        Self {
            intervention_threshold: defaults::DEFAULT_INTERVENTION_THRESHOLD,
        }
    }
}
