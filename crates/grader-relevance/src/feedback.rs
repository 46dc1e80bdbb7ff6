//! Relevance/coherence feedback.

use grader_core::config::defaults::DEFAULT_STRENGTH_THRESHOLD;
use grader_core::models::{EvaluationMetrics, Feedback, PriorityLevel};

/// Feedback at the default strength threshold.
pub fn generate_actionable_feedback(metrics: &EvaluationMetrics) -> Feedback {
    feedback_at(metrics, DEFAULT_STRENGTH_THRESHOLD)
}

/// Each axis at or above `threshold` is a strength, otherwise an improvement
/// area with a recommendation. Priority rises with the number of weak axes.
pub fn feedback_at(metrics: &EvaluationMetrics, threshold: f64) -> Feedback {
    let mut feedback = Feedback::default();
    let mut weak = 0;

    if metrics.relevance_score < threshold {
        weak += 1;
        feedback
            .areas_for_improvement
            .push("Overall response relevance needs improvement".to_string());
        feedback.specific_recommendations.push(
            "Ensure the response comprehensively addresses all aspects of the query".to_string(),
        );
    }
    if metrics.coherence_score < threshold {
        weak += 1;
        feedback
            .areas_for_improvement
            .push("Response coherence could be strengthened".to_string());
        feedback
            .specific_recommendations
            .push("Improve logical flow and transitions throughout the response".to_string());
    }

    if metrics.relevance_score >= threshold {
        feedback
            .strengths
            .push("Excellent overall relevance to query".to_string());
    }
    if metrics.coherence_score >= threshold {
        feedback
            .strengths
            .push("Strong coherence and logical flow".to_string());
    }

    feedback.priority_level = match weak {
        0 => PriorityLevel::Low,
        1 => PriorityLevel::Medium,
        _ => PriorityLevel::High,
    };
    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_axes_are_strengths() {
        let fb = generate_actionable_feedback(&EvaluationMetrics::new(0.9, 0.8));
        assert_eq!(fb.strengths.len(), 2);
        assert!(fb.areas_for_improvement.is_empty());
        assert_eq!(fb.priority_level, PriorityLevel::Low);
    }

    #[test]
    fn weak_axes_raise_priority() {
        let one = generate_actionable_feedback(&EvaluationMetrics::new(0.5, 0.9));
        assert_eq!(one.priority_level, PriorityLevel::Medium);
        assert_eq!(
            one.areas_for_improvement,
            vec!["Overall response relevance needs improvement"]
        );
        assert_eq!(one.strengths, vec!["Strong coherence and logical flow"]);

        let both = generate_actionable_feedback(&EvaluationMetrics::new(0.1, 0.79));
        assert_eq!(both.priority_level, PriorityLevel::High);
        assert_eq!(both.specific_recommendations.len(), 2);
    }
}
