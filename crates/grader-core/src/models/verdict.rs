use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BiasReport, EvaluationMetrics, EvaluationResult, Feedback, Intervention};

/// Accuracy result for one eligible block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockAccuracy {
    pub block_index: usize,
    pub result: EvaluationResult,
    pub feedback: Feedback,
}

/// Combined outcome of one document evaluation. Lives for the duration of the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub header: String,
    /// The query the document was scored against.
    pub query: String,
    pub relevance: EvaluationMetrics,
    pub relevance_feedback: Feedback,
    pub accuracy: Vec<BlockAccuracy>,
    pub bias: BiasReport,
    /// Merged feedback across all three axes.
    pub feedback: Feedback,
    pub interventions: Vec<Intervention>,
}

impl Verdict {
    /// Weighted relevance/coherence score of the document.
    pub fn overall_score(&self) -> f64 {
        self.relevance.overall_score
    }

    /// Mean accuracy over scored blocks, or `None` if no block was eligible.
    pub fn mean_accuracy(&self) -> Option<f64> {
        if self.accuracy.is_empty() {
            return None;
        }
        let total: f64 = self.accuracy.iter().map(|a| a.result.content_score).sum();
        Some(total / self.accuracy.len() as f64)
    }
}
