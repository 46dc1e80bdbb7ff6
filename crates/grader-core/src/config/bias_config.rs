use serde::{Deserialize, Serialize};

use super::defaults;

/// Bias analyzer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BiasConfig {
    /// Tokens inspected on each side of a professional term.
    pub context_window: usize,
    /// Share of one gender above which a strong-bias flag is raised.
    pub skew_threshold: f64,
    /// Lower bound of the balanced representation ratio range.
    pub balanced_ratio_min: f64,
    /// Upper bound of the balanced representation ratio range.
    pub balanced_ratio_max: f64,
    /// Maximum illustrative excerpts attached to recommendations.
    pub max_examples: usize,
    /// Attribute later pronouns to an entity whose gender is already established.
    pub carry_over_resolution: bool,
}

impl Default for BiasConfig {
    fn default() -> Self {
        Self {
            context_window: defaults::DEFAULT_CONTEXT_WINDOW,
            skew_threshold: defaults::DEFAULT_SKEW_THRESHOLD,
            balanced_ratio_min: defaults::DEFAULT_BALANCED_RATIO_MIN,
            balanced_ratio_max: defaults::DEFAULT_BALANCED_RATIO_MAX,
            max_examples: defaults::DEFAULT_MAX_EXAMPLES,
            carry_over_resolution: defaults::DEFAULT_CARRY_OVER_RESOLUTION,
        }
    }
}
