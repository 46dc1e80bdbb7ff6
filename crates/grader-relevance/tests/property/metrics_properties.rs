//! Property tests for relevance metric aggregation.

use grader_core::models::EvaluationMetrics;
use grader_relevance::generate_actionable_feedback;
use proptest::prelude::*;

proptest! {
    #[test]
    fn overall_is_weighted_sum(r in 0.0f64..=1.0, c in 0.0f64..=1.0) {
        let m = EvaluationMetrics::new(r, c);
        prop_assert!((m.overall_score - (0.6 * r + 0.4 * c)).abs() < 1e-12);
        prop_assert!((0.0..=1.0 + 1e-12).contains(&m.overall_score));
    }

    #[test]
    fn every_axis_is_either_strength_or_improvement(r in 0.0f64..=1.0, c in 0.0f64..=1.0) {
        let fb = generate_actionable_feedback(&EvaluationMetrics::new(r, c));
        prop_assert_eq!(fb.strengths.len() + fb.areas_for_improvement.len(), 2);
        prop_assert_eq!(fb.areas_for_improvement.len(), fb.specific_recommendations.len());
    }
}
