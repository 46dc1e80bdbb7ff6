use serde::{Deserialize, Serialize};

use super::BlockKind;
use crate::constants::{ACCURACY_FAILURE_SCORE, COHERENCE_WEIGHT, RELEVANCE_WEIGHT};

/// Accuracy-axis result for a single block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub block_kind: BlockKind,
    pub has_citations: bool,
    pub structure_valid: bool,
    /// Oracle-graded accuracy (0.0–1.0). Always 0.0 when the structure is invalid.
    pub content_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl EvaluationResult {
    /// Result for a block rejected by the structure validator.
    pub fn invalid_structure(block_kind: BlockKind, has_citations: bool) -> Self {
        Self {
            block_kind,
            has_citations,
            structure_valid: false,
            content_score: ACCURACY_FAILURE_SCORE,
            error_message: Some("Invalid block structure".to_string()),
        }
    }

    /// Result for a well-formed block whose grading call failed.
    pub fn oracle_failure(block_kind: BlockKind, has_citations: bool, reason: String) -> Self {
        Self {
            block_kind,
            has_citations,
            structure_valid: true,
            content_score: ACCURACY_FAILURE_SCORE,
            error_message: Some(reason),
        }
    }

    pub fn scored(block_kind: BlockKind, has_citations: bool, content_score: f64) -> Self {
        Self {
            block_kind,
            has_citations,
            structure_valid: true,
            content_score,
            error_message: None,
        }
    }
}

/// Relevance-axis result for a whole document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub relevance_score: f64,
    pub coherence_score: f64,
    /// `0.6 * relevance_score + 0.4 * coherence_score`.
    pub overall_score: f64,
}

impl EvaluationMetrics {
    pub fn new(relevance_score: f64, coherence_score: f64) -> Self {
        Self {
            relevance_score,
            coherence_score,
            overall_score: RELEVANCE_WEIGHT * relevance_score + COHERENCE_WEIGHT * coherence_score,
        }
    }
}
