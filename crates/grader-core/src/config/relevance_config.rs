use serde::{Deserialize, Serialize};

use super::defaults;

/// Relevance and coherence scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceConfig {
    /// Maximum number of coherence oracle calls in flight at once.
    pub coherence_batch_size: usize,
    /// Score used when a relevance or coherence reply is unusable.
    pub fallback_score: f64,
    /// Axis scores at or above this are reported as strengths.
    pub strength_threshold: f64,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            coherence_batch_size: defaults::DEFAULT_COHERENCE_BATCH_SIZE,
            fallback_score: defaults::DEFAULT_RELEVANCE_FALLBACK_SCORE,
            strength_threshold: defaults::DEFAULT_STRENGTH_THRESHOLD,
        }
    }
}
