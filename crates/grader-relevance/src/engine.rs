//! RelevanceEvaluator: pairwise coherence plus whole-document relevance.
//!
//! Failures never propagate. An unusable coherence or relevance reply is
//! replaced by the configured fallback score (0.5 by default), and a document
//! with fewer than two blocks scores the fallback for coherence without any
//! oracle call.

use std::sync::Arc;

use grader_core::config::RelevanceConfig;
use grader_core::errors::GraderResult;
use grader_core::models::{Block, EvaluationMetrics, Feedback};
use grader_core::score::{clamp_score, parse_score};
use grader_core::traits::IScoringOracle;
use tracing::{debug, warn};

use crate::batch::run_batched;
use crate::{feedback, prompts};

pub struct RelevanceEvaluator<O> {
    oracle: Arc<O>,
    config: RelevanceConfig,
}

impl<O: IScoringOracle> RelevanceEvaluator<O> {
    pub fn new(oracle: Arc<O>, config: RelevanceConfig) -> Self {
        Self { oracle, config }
    }

    pub fn config(&self) -> &RelevanceConfig {
        &self.config
    }

    /// Run coherence and relevance concurrently and combine them.
    pub async fn evaluate_response(&self, query: &str, blocks: &[Block]) -> EvaluationMetrics {
        let (coherence, relevance) = futures::join!(
            self.evaluate_coherence(blocks),
            self.evaluate_relevance(blocks, query)
        );
        let metrics = EvaluationMetrics::new(relevance, coherence);
        debug!(
            relevance,
            coherence,
            overall = metrics.overall_score,
            "relevance evaluation complete"
        );
        metrics
    }

    /// Mean coherence over all adjacent block pairs.
    pub async fn evaluate_coherence(&self, blocks: &[Block]) -> f64 {
        let pairs: Vec<(&Block, &Block)> = blocks.windows(2).map(|w| (&w[0], &w[1])).collect();
        if pairs.is_empty() {
            return self.config.fallback_score;
        }

        let count = pairs.len();
        let scores = run_batched(pairs, self.config.coherence_batch_size, move |(a, b)| {
            self.pair_coherence(a, b)
        })
        .await;

        debug!(pairs = count, "coherence pairs scored");
        scores.iter().sum::<f64>() / count as f64
    }

    /// Coherence of one adjacent pair, or the fallback if the reply is unusable.
    pub async fn pair_coherence(&self, first: &Block, second: &Block) -> f64 {
        let prompt = prompts::coherence(first.renderable_text(), second.renderable_text());
        match self.ask(&prompt).await {
            Ok(score) => score,
            Err(e) => {
                warn!(error = %e, "coherence pair fell back");
                self.config.fallback_score
            }
        }
    }

    /// Relevance of the whole document to `query`.
    pub async fn evaluate_relevance(&self, blocks: &[Block], query: &str) -> f64 {
        let document = render_document(blocks);
        let prompt = prompts::relevance(query, &document);
        match self.ask(&prompt).await {
            Ok(score) => score,
            Err(e) => {
                warn!(error = %e, "relevance fell back");
                self.config.fallback_score
            }
        }
    }

    /// Feedback at the configured strength threshold.
    pub fn feedback(&self, metrics: &EvaluationMetrics) -> Feedback {
        feedback::feedback_at(metrics, self.config.strength_threshold)
    }

    async fn ask(&self, prompt: &str) -> GraderResult<f64> {
        let reply = self.oracle.score(prompt).await?;
        Ok(clamp_score(parse_score(&reply)?, 0.0, 1.0))
    }
}

/// Blocks' renderable text joined by blank lines.
pub fn render_document(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::renderable_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_rendering_keeps_empty_slots() {
        let blocks = vec![
            Block::header("H"),
            Block::metric("1", "d"),
            Block::paragraph("P"),
        ];
        assert_eq!(render_document(&blocks), "H\n\n\n\nP");
    }
}
