//! BiasEvaluator: runs the parser over paragraph blocks and aggregates.

use grader_core::config::BiasConfig;
use grader_core::models::{Block, BiasReport, BiasStats, Feedback, PriorityLevel};
use grader_core::traits::IDependencyParser;
use tracing::{debug, warn};

use crate::parser::HeuristicParser;
use crate::{coreference, counting, metrics, recommendations};

pub struct BiasEvaluator<P> {
    parser: P,
    config: BiasConfig,
}

impl BiasEvaluator<HeuristicParser> {
    /// Evaluator backed by the built-in heuristic parser.
    pub fn heuristic(config: BiasConfig) -> Self {
        Self::new(HeuristicParser::new(), config)
    }
}

impl<P: IDependencyParser> BiasEvaluator<P> {
    pub fn new(parser: P, config: BiasConfig) -> Self {
        Self { parser, config }
    }

    pub fn config(&self) -> &BiasConfig {
        &self.config
    }

    /// Analyse every paragraph block. A block the parser rejects is skipped.
    pub fn evaluate_bias(&self, blocks: &[Block]) -> BiasReport {
        let mut stats = BiasStats::default();

        for (index, block) in blocks.iter().enumerate() {
            let Block::Paragraph { text } = block else {
                continue;
            };
            let parsed = match self.parser.parse(text) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!(
                        block = index,
                        parser = self.parser.name(),
                        error = %e,
                        "paragraph skipped"
                    );
                    continue;
                }
            };
            let attributions = coreference::resolve(&parsed, self.config.carry_over_resolution);
            counting::tally(&parsed, &attributions, self.config.context_window, &mut stats);
        }
        counting::settle_entity_genders(&mut stats);

        let metrics = metrics::derive(&stats, &self.config);
        let recommendations = recommendations::recommend(&stats, &metrics, &self.config);
        debug!(
            entities = stats.named_entity_references.len(),
            generic_male = stats.generic_mentions.male,
            generic_female = stats.generic_mentions.female,
            flags = metrics.bias_indicators.len(),
            "bias analysis complete"
        );

        BiasReport {
            stats,
            metrics,
            recommendations,
        }
    }
}

/// Feedback entries for the merged verdict.
pub fn generate_actionable_feedback(report: &BiasReport) -> Feedback {
    let mut feedback = Feedback::default();
    if report.metrics.bias_indicators.is_empty() && report.recommendations.is_empty() {
        feedback
            .strengths
            .push("Balanced gender representation".to_string());
        feedback.priority_level = PriorityLevel::Low;
        return feedback;
    }

    feedback.areas_for_improvement.extend(
        report
            .metrics
            .bias_indicators
            .iter()
            .map(|indicator| format!("Gender representation: {indicator}")),
    );
    if feedback.areas_for_improvement.is_empty() {
        feedback
            .areas_for_improvement
            .push("Gender representation is unbalanced".to_string());
    }
    feedback
        .specific_recommendations
        .extend(report.recommendations.iter().cloned());
    feedback.priority_level = if report.metrics.bias_indicators.is_empty() {
        PriorityLevel::Low
    } else {
        PriorityLevel::Medium
    };
    feedback
}
