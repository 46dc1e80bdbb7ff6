//! AccuracyEvaluator: structure check, oracle grading, and corrections.
//!
//! Nothing here returns an error to the caller. A rejected structure scores
//! 0.0 without touching the oracle; an oracle or parse failure scores 0.0
//! with the reason in `error_message`; a failed correction comes back as
//! [`Correction::Failed`] carrying the untouched block.

use std::sync::Arc;

use grader_core::config::AccuracyConfig;
use grader_core::errors::{CorrectionError, GraderResult};
use grader_core::models::{Block, BlockKind, Cell, Correction, EvaluationResult};
use grader_core::score::parse_unit_score;
use grader_core::traits::IScoringOracle;
use serde_json::Value;
use tracing::{debug, warn};

use crate::citations::{self, CitationLookup};
use crate::{prompts, structure};

pub struct AccuracyEvaluator<O> {
    oracle: Arc<O>,
    config: AccuracyConfig,
}

impl<O: IScoringOracle> AccuracyEvaluator<O> {
    pub fn new(oracle: Arc<O>, config: AccuracyConfig) -> Self {
        Self { oracle, config }
    }

    pub fn config(&self) -> &AccuracyConfig {
        &self.config
    }

    /// Whether a block kind takes part in accuracy scoring at all.
    pub fn is_eligible(block: &Block) -> bool {
        matches!(block.kind(), BlockKind::Metric | BlockKind::Table)
    }

    /// Whether a result scores low enough to warrant a correction request.
    pub fn needs_intervention(&self, result: &EvaluationResult) -> bool {
        result.content_score < self.config.intervention_threshold
    }

    /// Score one block. `context` is the text the block sits under.
    pub async fn evaluate_block(
        &self,
        block: &Block,
        context: &str,
        lookup: &CitationLookup,
    ) -> EvaluationResult {
        let kind = block.kind();
        let has_citations = block.has_citations();

        if !structure::validate(block) {
            debug!(block_kind = %kind, "structure rejected, skipping oracle");
            return EvaluationResult::invalid_structure(kind, has_citations);
        }

        let resolved = citations::resolve(block, lookup);
        let citation_info = citations::render(&resolved);
        let prompt = match block {
            Block::Metric(metric) => prompts::metric_evaluation(metric, context, &citation_info),
            Block::Table(table) => prompts::table_evaluation(&table.rows, context, &citation_info),
            _ => return EvaluationResult::invalid_structure(kind, has_citations),
        };

        match self.grade(&prompt).await {
            Ok(score) => {
                debug!(block_kind = %kind, score, "block graded");
                EvaluationResult::scored(kind, has_citations, score)
            }
            Err(e) => {
                warn!(block_kind = %kind, error = %e, "accuracy grading failed");
                EvaluationResult::oracle_failure(kind, has_citations, e.to_string())
            }
        }
    }

    async fn grade(&self, prompt: &str) -> GraderResult<f64> {
        let reply = self.oracle.score(prompt).await?;
        Ok(parse_unit_score(&reply)?)
    }

    /// Ask the oracle for a corrected version of the block.
    pub async fn suggest_intervention(
        &self,
        block: &Block,
        context: &str,
        lookup: &CitationLookup,
    ) -> Correction {
        match self.request_correction(block, context, lookup).await {
            Ok(correction) => correction,
            Err(e) => {
                warn!(block_kind = %block.kind(), error = %e, "correction failed");
                Correction::failed(format!("Failed to generate correction: {e}"), block)
            }
        }
    }

    async fn request_correction(
        &self,
        block: &Block,
        context: &str,
        lookup: &CitationLookup,
    ) -> GraderResult<Correction> {
        let resolved = citations::resolve(block, lookup);
        let citation_info = citations::render(&resolved);
        let has_citations = !resolved.is_empty();

        let prompt = match block {
            Block::Metric(metric) => {
                prompts::metric_correction(metric, context, &citation_info, has_citations)
            }
            Block::Table(table) => {
                prompts::table_correction(&table.rows, context, &citation_info, has_citations)
            }
            other => {
                return Err(CorrectionError::UnsupportedKind {
                    kind: other.kind().to_string(),
                }
                .into())
            }
        };

        let reply = self.oracle.score_json(&prompt).await?;
        Ok(parse_correction(block.kind(), &reply)?)
    }
}

/// Interpret a correction reply for a block of `kind`.
///
/// Metric replies need `metric` and `description`; table replies need a
/// `table` array of rows. Extra keys are ignored.
pub fn parse_correction(kind: BlockKind, reply: &str) -> Result<Correction, CorrectionError> {
    let value: Value =
        serde_json::from_str(strip_code_fence(reply)).map_err(|e| CorrectionError::MalformedJson {
            reason: e.to_string(),
        })?;
    let Value::Object(fields) = value else {
        return Err(CorrectionError::MalformedJson {
            reason: "reply is not an object".to_string(),
        });
    };

    let missing = |required: &[&str]| -> Result<(), CorrectionError> {
        let absent: Vec<&str> = required
            .iter()
            .copied()
            .filter(|key| !fields.contains_key(*key))
            .collect();
        if absent.is_empty() {
            Ok(())
        } else {
            Err(CorrectionError::MissingFields {
                kind: kind.to_string(),
                fields: absent.join(", "),
            })
        }
    };

    match kind {
        BlockKind::Metric => {
            missing(&["metric", "description"])?;
            Ok(Correction::Metric {
                metric: text_of(&fields["metric"]),
                description: text_of(&fields["description"]),
            })
        }
        BlockKind::Table => {
            missing(&["table"])?;
            let table: Vec<Vec<Cell>> = serde_json::from_value(fields["table"].clone())
                .map_err(|e| CorrectionError::MalformedJson {
                    reason: format!("table: {e}"),
                })?;
            Ok(Correction::Table { table })
        }
        other => Err(CorrectionError::UnsupportedKind {
            kind: other.to_string(),
        }),
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Drop a surrounding ```json fence if the oracle added one.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
