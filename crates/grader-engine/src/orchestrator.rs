//! CoreEvaluator: composes the three axis evaluators into a [`Verdict`].
//!
//! The accuracy pass (with its corrections) runs overlapped with relevance and
//! coherence scoring; bias analysis is synchronous and runs afterwards. No
//! scoring decision is made here.

use std::sync::Arc;

use chrono::Utc;
use grader_accuracy::{AccuracyEvaluator, CitationLookup};
use grader_bias::{BiasEvaluator, HeuristicParser};
use grader_core::config::GraderConfig;
use grader_core::constants::NO_HEADER;
use grader_core::errors::GraderResult;
use grader_core::models::{Block, BlockAccuracy, Intervention, Verdict};
use grader_core::traits::{IDependencyParser, IScoringOracle};
use grader_oracle::ChatOracle;
use grader_relevance::RelevanceEvaluator;
use tracing::{debug, info};
use uuid::Uuid;

use crate::feedback::merge_feedback;

pub struct CoreEvaluator<O, P> {
    accuracy: AccuracyEvaluator<O>,
    relevance: RelevanceEvaluator<O>,
    bias: BiasEvaluator<P>,
}

impl CoreEvaluator<ChatOracle, HeuristicParser> {
    /// Production wiring: chat-completions oracle keyed from the environment,
    /// heuristic dependency parser.
    pub fn from_config(config: &GraderConfig) -> GraderResult<Self> {
        let oracle = Arc::new(ChatOracle::from_env(config.oracle.clone())?);
        Ok(Self::new(oracle, HeuristicParser::new(), config))
    }
}

impl<O: IScoringOracle, P: IDependencyParser> CoreEvaluator<O, P> {
    pub fn new(oracle: Arc<O>, parser: P, config: &GraderConfig) -> Self {
        Self {
            accuracy: AccuracyEvaluator::new(Arc::clone(&oracle), config.accuracy.clone()),
            relevance: RelevanceEvaluator::new(oracle, config.relevance.clone()),
            bias: BiasEvaluator::new(parser, config.bias.clone()),
        }
    }

    /// Grade one document. An empty `query` means "grade against the header".
    ///
    /// Never fails: every oracle or parser problem is folded into the verdict
    /// as a fallback score or an error annotation.
    pub async fn evaluate_response(
        &self,
        blocks: &[Block],
        query: &str,
        lookup: &CitationLookup,
    ) -> Verdict {
        let header = document_header(blocks);
        let query = if query.trim().is_empty() {
            header.clone()
        } else {
            query.to_string()
        };
        info!(blocks = blocks.len(), header = %header, "evaluating document");

        let (relevance, (accuracy, interventions)) = futures::join!(
            self.relevance.evaluate_response(&query, blocks),
            self.evaluate_accuracy(blocks, &header, lookup)
        );
        let relevance_feedback = self.relevance.feedback(&relevance);

        let bias = self.bias.evaluate_bias(blocks);
        let bias_feedback = grader_bias::generate_actionable_feedback(&bias);

        let feedback = merge_feedback(
            std::iter::once(&relevance_feedback)
                .chain(accuracy.iter().map(|a| &a.feedback))
                .chain(std::iter::once(&bias_feedback)),
        );

        info!(
            overall = relevance.overall_score,
            scored_blocks = accuracy.len(),
            interventions = interventions.len(),
            bias_flags = bias.metrics.bias_indicators.len(),
            "document evaluated"
        );

        Verdict {
            id: Uuid::new_v4(),
            evaluated_at: Utc::now(),
            header,
            query,
            relevance,
            relevance_feedback,
            accuracy,
            bias,
            feedback,
            interventions,
        }
    }

    /// Score every metric and table in document order, requesting a
    /// correction right after each low-scoring block.
    async fn evaluate_accuracy(
        &self,
        blocks: &[Block],
        header: &str,
        lookup: &CitationLookup,
    ) -> (Vec<BlockAccuracy>, Vec<Intervention>) {
        let mut scored = Vec::new();
        let mut interventions = Vec::new();

        let sections = blocks.iter().zip(contexts(blocks, header));
        for (block_index, (block, context)) in sections.enumerate() {
            if !AccuracyEvaluator::<O>::is_eligible(block) {
                continue;
            }
            let result = self.accuracy.evaluate_block(block, context, lookup).await;
            let feedback = grader_accuracy::generate_actionable_feedback(&result);

            if self.accuracy.needs_intervention(&result) {
                debug!(block = block_index, score = result.content_score, "requesting correction");
                let correction = self.accuracy.suggest_intervention(block, context, lookup).await;
                interventions.push(Intervention {
                    block_index,
                    block_kind: result.block_kind,
                    content_score: result.content_score,
                    correction,
                });
            }
            scored.push(BlockAccuracy {
                block_index,
                result,
                feedback,
            });
        }
        (scored, interventions)
    }
}

/// Header text of the first block, or the placeholder when the document does
/// not open with a header.
pub fn document_header(blocks: &[Block]) -> String {
    match blocks.first() {
        Some(Block::Header { text }) => text.clone(),
        _ => NO_HEADER.to_string(),
    }
}

/// The nearest preceding header for every block, falling back to `header`.
fn contexts<'a>(blocks: &'a [Block], header: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    blocks.iter().scan(header, |current, block| {
        if let Block::Header { text } = block {
            *current = text.as_str();
        }
        Some(*current)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_comes_from_a_leading_header_block() {
        assert_eq!(document_header(&[Block::header("Intro"), Block::paragraph("p")]), "Intro");
        assert_eq!(document_header(&[Block::paragraph("p"), Block::header("Late")]), NO_HEADER);
        assert_eq!(document_header(&[]), NO_HEADER);
    }

    #[test]
    fn contexts_track_the_nearest_header() {
        let blocks = vec![
            Block::paragraph("a"),
            Block::header("Section"),
            Block::metric("1", "d"),
        ];
        let got: Vec<&str> = contexts(&blocks, "Doc").collect();
        assert_eq!(got, vec!["Doc", "Section", "Section"]);
    }
}
